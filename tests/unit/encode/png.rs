use super::*;

fn result(width: u32, height: u32, px: [u8; 4]) -> RenderResult {
    RenderResult {
        width,
        height,
        data: std::iter::repeat_n(px, (width * height) as usize)
            .flatten()
            .collect(),
    }
}

#[test]
fn opaque_pixels_survive_unchanged() {
    let r = result(3, 2, [12, 34, 56, 255]);
    let png = encode(&r).unwrap();
    assert_eq!(&png[..8], b"\x89PNG\r\n\x1a\n");

    let back = image::load_from_memory(&png).unwrap().to_rgba8();
    assert_eq!(back.dimensions(), (3, 2));
    assert_eq!(back.into_raw(), r.data);
}

#[test]
fn translucent_pixels_are_unpremultiplied() {
    let r = result(1, 1, [64, 32, 0, 128]);
    let png = encode(&r).unwrap();
    let back = image::load_from_memory(&png).unwrap().to_rgba8();
    assert_eq!(back.into_raw(), vec![128, 64, 0, 128]);
}

#[test]
fn encoding_is_deterministic() {
    let r = result(5, 5, [1, 2, 3, 255]);
    assert_eq!(encode(&r).unwrap(), encode(&r).unwrap());
}

#[test]
fn short_buffer_is_an_error() {
    let mut r = result(2, 2, [0, 0, 0, 255]);
    r.data.pop();
    assert!(encode(&r).is_err());
}

#[test]
fn encode_to_path_creates_parent_dirs() {
    let dir = std::path::PathBuf::from("target")
        .join("unit_png")
        .join("nested");
    let _ = std::fs::remove_dir_all(&dir);
    let path = dir.join(DEFAULT_FILE_NAME);

    encode_to_path(&result(4, 4, [9, 8, 7, 255]), &path).unwrap();
    let back = image::open(&path).unwrap().to_rgba8();
    assert_eq!(back.dimensions(), (4, 4));
}
