/// Tests for mip chain generation

use super::*;

// ============================================================================
// Tests: max_mip_levels
// ============================================================================

#[test]
fn test_max_mip_levels() {
    // 256x256 -> floor(log2(256)) + 1 = 9
    assert_eq!(max_mip_levels(256, 256), 9);
    assert_eq!(max_mip_levels(16, 16), 5);
    assert_eq!(max_mip_levels(1, 1), 1);

    // Non-square: use max dimension
    assert_eq!(max_mip_levels(64, 16), 7);
    assert_eq!(max_mip_levels(3, 1), 2);
}

#[test]
fn test_max_mip_levels_zero_is_one() {
    assert_eq!(max_mip_levels(0, 0), 1);
}

// ============================================================================
// Tests: generate_mip_levels
// ============================================================================

#[test]
fn test_generate_level_count_and_sizes() {
    let source = ImageData::filled(16, 8, [255, 0, 0, 255]);
    let chain = generate_mip_levels(&source, 4);

    assert_eq!(chain.len(), 4);
    let sizes: Vec<(u32, u32)> = chain.iter().map(|l| (l.width(), l.height())).collect();
    assert_eq!(sizes, vec![(16, 8), (8, 4), (4, 2), (2, 1)]);
}

#[test]
fn test_generate_level_zero_is_source() {
    let source = ImageData::filled(4, 4, [1, 2, 3, 4]);
    let chain = generate_mip_levels(&source, 3);
    assert_eq!(chain[0], source);
}

#[test]
fn test_generate_clamps_level_count() {
    let source = ImageData::filled(4, 4, [0; 4]);

    // 4x4 supports 3 levels (4, 2, 1)
    assert_eq!(generate_mip_levels(&source, 10).len(), 3);

    // Zero still produces the base level
    assert_eq!(generate_mip_levels(&source, 0).len(), 1);
}

#[test]
fn test_generate_box_filter_average() {
    // 2x2 with one bright pixel -> single averaged pixel
    let source = ImageData::new(
        2,
        2,
        vec![
            200, 0, 0, 255, 0, 0, 0, 255, //
            0, 0, 0, 255, 0, 100, 0, 255,
        ],
    )
    .unwrap();

    let chain = generate_mip_levels(&source, 2);
    assert_eq!(chain[1].width(), 1);
    assert_eq!(chain[1].height(), 1);
    assert_eq!(chain[1].pixel(0, 0), Some([50, 25, 0, 255]));
}

#[test]
fn test_generate_uniform_color_is_preserved() {
    let source = ImageData::filled(32, 32, [12, 34, 56, 78]);
    for level in generate_mip_levels(&source, 6) {
        assert_eq!(level.pixel(0, 0), Some([12, 34, 56, 78]));
    }
}

#[test]
fn test_generate_odd_dimensions() {
    // 3x1 -> 1x1, the last column is reused for the missing neighbour
    let source = ImageData::new(3, 1, vec![
        0, 0, 0, 0, //
        100, 0, 0, 0, //
        255, 0, 0, 0,
    ])
    .unwrap();

    let chain = generate_mip_levels(&source, 2);
    assert_eq!(chain[1].width(), 1);
    assert_eq!(chain[1].height(), 1);
    // (0 + 100 + 0 + 100 + 2) / 4
    assert_eq!(chain[1].pixel(0, 0), Some([50, 0, 0, 0]));
}

#[test]
fn test_generate_derived_levels_are_valid_images() {
    // 5x3 gradient: every level must carry real filtered pixels with the
    // byte length its dimensions imply
    let pixels: Vec<u8> = (0..5 * 3).flat_map(|i| [i as u8 * 10 + 5, 0, 0, 255]).collect();
    let source = ImageData::new(5, 3, pixels).unwrap();

    let chain = generate_mip_levels(&source, 3);
    assert_eq!(chain.len(), 3);
    for level in &chain[1..] {
        let rebuilt = ImageData::new(level.width(), level.height(), level.pixels().to_vec());
        assert_eq!(rebuilt.as_ref(), Ok(level));
        assert!(level.pixels().chunks(4).all(|p| p[0] > 0 && p[3] == 255));
    }

    // 5x3 -> 2x1: (0,0),(1,0),(0,1),(1,1) -> (5 + 15 + 55 + 65 + 2) / 4
    assert_eq!(chain[1].pixel(0, 0), Some([35, 0, 0, 255]));
}
