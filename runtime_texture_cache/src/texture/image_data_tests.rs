/// Tests for ImageData

use super::*;

// ============================================================================
// Tests: Construction
// ============================================================================

#[test]
fn test_new_valid_image() {
    let image = ImageData::new(2, 1, vec![1, 2, 3, 4, 5, 6, 7, 8]).unwrap();
    assert_eq!(image.width(), 2);
    assert_eq!(image.height(), 1);
    assert_eq!(image.pixels().len(), 8);
}

#[test]
fn test_new_zero_dimension_fails() {
    let result = ImageData::new(0, 4, Vec::new());
    assert!(matches!(result, Err(Error::InvalidImage(_))));
}

#[test]
fn test_new_wrong_byte_length_fails() {
    let result = ImageData::new(2, 2, vec![0; 15]);
    match result {
        Err(Error::InvalidImage(msg)) => {
            assert!(msg.contains("16"));
            assert!(msg.contains("15"));
        }
        other => panic!("expected InvalidImage, got {:?}", other),
    }
}

#[test]
fn test_filled_image() {
    let image = ImageData::filled(3, 2, [10, 20, 30, 255]);
    assert_eq!(image.pixels().len(), 3 * 2 * 4);
    for y in 0..2 {
        for x in 0..3 {
            assert_eq!(image.pixel(x, y), Some([10, 20, 30, 255]));
        }
    }
}

#[test]
fn test_filled_raises_zero_dimensions() {
    let image = ImageData::filled(0, 0, [1, 1, 1, 1]);
    assert_eq!(image.width(), 1);
    assert_eq!(image.height(), 1);
}

// ============================================================================
// Tests: Pixel access
// ============================================================================

#[test]
fn test_pixel_row_major_layout() {
    let image = ImageData::new(
        2,
        2,
        vec![
            1, 0, 0, 0, 2, 0, 0, 0, // row 0
            3, 0, 0, 0, 4, 0, 0, 0, // row 1
        ],
    )
    .unwrap();

    assert_eq!(image.pixel(0, 0), Some([1, 0, 0, 0]));
    assert_eq!(image.pixel(1, 0), Some([2, 0, 0, 0]));
    assert_eq!(image.pixel(0, 1), Some([3, 0, 0, 0]));
    assert_eq!(image.pixel(1, 1), Some([4, 0, 0, 0]));
}

#[test]
fn test_pixel_out_of_bounds() {
    let image = ImageData::filled(2, 2, [0; 4]);
    assert_eq!(image.pixel(2, 0), None);
    assert_eq!(image.pixel(0, 2), None);
}
