/// Tests for SlotCacheConfig

use super::*;

#[test]
fn test_default_config() {
    let config = SlotCacheConfig::default();
    assert_eq!(config.capacity, 16);
    assert_eq!(config.retry_delay_ticks, 20);
    assert_eq!(config.name, "runtime");
    assert!(config.validate().is_ok());
}

#[test]
fn test_with_capacity() {
    let config = SlotCacheConfig::with_capacity(4);
    assert_eq!(config.capacity, 4);
    assert_eq!(config.retry_delay_ticks, DEFAULT_RETRY_DELAY_TICKS);
}

#[test]
fn test_power_of_two_capacities_are_valid() {
    for capacity in [1, 2, 4, 8, 64, 1024] {
        assert!(SlotCacheConfig::with_capacity(capacity).validate().is_ok(), "capacity {}", capacity);
    }
}

#[test]
fn test_zero_capacity_fails() {
    let result = SlotCacheConfig::with_capacity(0).validate();
    assert!(matches!(result, Err(Error::InvalidConfig(_))));
}

#[test]
fn test_non_power_of_two_capacity_fails() {
    for capacity in [3, 6, 12, 100] {
        match SlotCacheConfig::with_capacity(capacity).validate() {
            Err(Error::InvalidConfig(msg)) => assert!(msg.contains(&capacity.to_string())),
            other => panic!("capacity {} should fail, got {:?}", capacity, other),
        }
    }
}

#[test]
fn test_retry_delay_bounds() {
    let mut config = SlotCacheConfig::default();

    config.retry_delay_ticks = 0;
    assert!(config.validate().is_err());

    config.retry_delay_ticks = DECAY_PINNED;
    assert!(config.validate().is_err());

    config.retry_delay_ticks = 1;
    assert!(config.validate().is_ok());
}
