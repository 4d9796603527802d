use super::*;

#[test]
fn over_src_alpha_0_is_noop() {
    let dst = [10, 20, 30, 255];
    assert_eq!(over(dst, [0, 0, 0, 0]), dst);
}

#[test]
fn over_src_opaque_replaces_dst() {
    assert_eq!(over([10, 20, 30, 255], [1, 2, 3, 255]), [1, 2, 3, 255]);
}

#[test]
fn over_half_black_darkens_opaque_dst() {
    let out = over([200, 100, 50, 255], [0, 0, 0, 128]);
    assert_eq!(out, [100, 50, 25, 255]);
}

#[test]
fn over_in_place_rejects_mismatched_buffers() {
    let mut dst = vec![0u8; 8];
    assert!(over_in_place(&mut dst, &[0u8; 4]).is_err());
}

#[test]
fn mask_scales_premultiplied_pixels() {
    let mut px = vec![200, 100, 50, 255, 9, 9, 9, 255, 9, 9, 9, 255];
    mask_in_place(&mut px, &[255, 0, 128]).unwrap();
    assert_eq!(&px[0..4], &[200, 100, 50, 255]);
    assert_eq!(&px[4..8], &[0, 0, 0, 0]);
    assert_eq!(&px[8..12], &[5, 5, 5, 128]);

    assert!(mask_in_place(&mut px, &[255]).is_err());
}

#[test]
fn disk_coverage_is_full_inside_and_empty_outside() {
    let size = 40;
    let cov = disk_coverage(size, Point::new(20.0, 20.0), 15.0).unwrap();
    assert_eq!(cov.len(), (size * size) as usize);

    let at = |x: u32, y: u32| cov[(y * size + x) as usize];
    assert_eq!(at(20, 20), 255);
    assert_eq!(at(10, 20), 255);
    assert_eq!(at(0, 0), 0);
    assert_eq!(at(39, 39), 0);
    assert_eq!(at(20, 1), 0);
}

#[test]
fn zero_radius_disk_has_no_coverage() {
    let cov = disk_coverage(8, Point::new(4.0, 4.0), 0.0).unwrap();
    assert!(cov.iter().all(|&c| c == 0));
}

#[test]
fn ring_is_outer_minus_inner() {
    assert_eq!(ring_coverage(&[255, 255, 100], &[255, 0, 200]), vec![0, 255, 0]);
}

#[test]
fn clear_pixmap_fills_every_pixel() {
    let mut p = new_pixmap(3, 2).unwrap();
    clear_pixmap(&mut p, Rgba8Premul::opaque(1, 2, 3));
    assert!(
        p.data_as_u8_slice()
            .chunks_exact(4)
            .all(|px| px == [1, 2, 3, 255])
    );
}

#[test]
fn oversized_surfaces_are_rejected() {
    assert!(new_pixmap(70_000, 1).is_err());
    let big = DecodedImage {
        width: 70_000,
        height: 1,
        rgba8_premul: std::sync::Arc::new(vec![0; 70_000 * 4]),
    };
    assert!(image_paint(&big).is_err());
}
