use super::*;

#[test]
fn straight_to_premul_rounds() {
    let c = Rgba8Premul::from_straight_rgba(200, 100, 0, 128);
    assert_eq!(c, Rgba8Premul { r: 100, g: 50, b: 0, a: 128 });

    let opaque = Rgba8Premul::from_straight_rgba(12, 34, 56, 255);
    assert_eq!(opaque, Rgba8Premul::opaque(12, 34, 56));
}

#[test]
fn lerp_endpoints_and_midpoint() {
    let a = Rgba8Premul::opaque(0, 100, 200);
    let b = Rgba8Premul::opaque(100, 100, 0);
    assert_eq!(a.lerp(b, 0.0), a);
    assert_eq!(a.lerp(b, 1.0), b);
    assert_eq!(a.lerp(b, 0.5), Rgba8Premul::opaque(50, 100, 100));
    assert_eq!(a.lerp(b, 7.0), b);
}
