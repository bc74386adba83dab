//! Regression tests for pixel extraction
//!
//! - row-major de-interleaving with padded strides
//! - bounds validation at every edge
//! - alpha and padding never reach the samples

use roistat_core::{Bgra, Channel, Error, PixelBuffer, Region, extract};
use roistat_test::TestImage;

#[test]
fn extract_reg_full_image_row_major() {
    let img = TestImage::gradient(4, 3);
    let buf = img.buffer().unwrap();
    let s = extract(&buf, Region::full(4, 3)).unwrap();

    assert_eq!(s.len(), 12);
    assert_eq!(s.red(), &[0, 1, 2, 3, 0, 1, 2, 3, 0, 1, 2, 3]);
    assert_eq!(s.green(), &[0, 0, 0, 0, 1, 1, 1, 1, 2, 2, 2, 2]);
    assert_eq!(s.blue(), &[0, 1, 2, 3, 1, 2, 3, 4, 2, 3, 4, 5]);
}

#[test]
fn extract_reg_padding_does_not_change_samples() {
    let img = TestImage::gradient(13, 11);
    let region = Region::new(3, 2, 9, 8);
    let tight = extract(&img.buffer().unwrap(), region).unwrap();
    for padding in [1, 3, 4, 60] {
        let padded = img.with_padding(padding);
        let s = extract(&padded.buffer().unwrap(), region).unwrap();
        assert_eq!(s, tight, "padding {padding}");
    }
}

#[test]
fn extract_reg_alpha_ignored() {
    let opaque = TestImage::uniform(6, 6, Bgra { b: 1, g: 2, r: 3, a: 255 });
    let clear = TestImage::uniform(6, 6, Bgra { b: 1, g: 2, r: 3, a: 0 });
    let region = Region::new(1, 1, 4, 4);
    assert_eq!(
        extract(&opaque.buffer().unwrap(), region).unwrap(),
        extract(&clear.buffer().unwrap(), region).unwrap()
    );
}

#[test]
fn extract_reg_sample_count_matches_area() {
    let img = TestImage::gradient(30, 20);
    let buf = img.buffer().unwrap();
    for region in [
        Region::new(0, 0, 1, 1),
        Region::new(29, 19, 1, 1),
        Region::new(5, 0, 25, 20),
        Region::new(0, 7, 30, 1),
    ] {
        let s = buf.extract(region).unwrap();
        assert_eq!(s.len() as u64, region.area());
        for ch in Channel::ALL {
            assert_eq!(s.channel(ch).len(), s.len());
        }
    }
}

#[test]
fn extract_reg_out_of_bounds_every_edge() {
    let img = TestImage::gradient(10, 8);
    let buf = img.buffer().unwrap();
    for region in [
        Region::new(0, 0, 11, 1),
        Region::new(9, 0, 2, 1),
        Region::new(0, 0, 1, 9),
        Region::new(0, 7, 1, 2),
        Region::new(-1, 0, 1, 1),
        Region::new(0, -1, 1, 1),
        Region::new(10, 0, 1, 1),
        Region::new(0, 8, 1, 1),
    ] {
        match extract(&buf, region) {
            Err(Error::OutOfBounds {
                region: r,
                width,
                height,
            }) => {
                assert_eq!(r, region);
                assert_eq!((width, height), (10, 8));
            }
            other => panic!("{region:?}: expected OutOfBounds, got {other:?}"),
        }
    }
}

#[test]
fn extract_reg_invalid_region() {
    let img = TestImage::gradient(10, 8);
    let buf = img.buffer().unwrap();
    for region in [
        Region::new(0, 0, 0, 1),
        Region::new(0, 0, 1, 0),
        Region::new(0, 0, -3, 2),
        Region::new(50, 50, 0, 0),
    ] {
        assert!(
            matches!(extract(&buf, region), Err(Error::InvalidRegion { .. })),
            "{region:?}"
        );
    }
}

#[test]
fn extract_reg_last_row_without_padding() {
    // Two rows with 4 bytes of padding, last row's padding cut off
    let img = TestImage::gradient(3, 2).with_padding(4);
    let data = &img.data[..img.data.len() - 4];
    let buf = PixelBuffer::new(data, 3, 2, img.stride).unwrap();
    let s = extract(&buf, Region::new(0, 1, 3, 1)).unwrap();
    assert_eq!(s.red(), &[0, 1, 2]);
    assert_eq!(s.green(), &[1, 1, 1]);
}
