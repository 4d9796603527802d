use super::*;
use serde_json::json;

#[test]
fn adjust_mid_gray_both_directions() {
    // 0x80 + 25 = 153 = 0x99, 0x80 - 25 = 103 = 0x67.
    assert_eq!(adjust_hex("#808080", 25).unwrap(), "#999999");
    assert_eq!(adjust_hex("#808080", -25).unwrap(), "#676767");
}

#[test]
fn adjust_special_cases_white_and_black() {
    assert_eq!(adjust_hex("#ffffff", 25).unwrap(), "#f0f0f0");
    assert_eq!(adjust_hex("#000000", -25).unwrap(), "#101010");

    // Only the direction that would saturate is special-cased.
    assert_eq!(adjust_hex("#ffffff", -25).unwrap(), "#e6e6e6");
    assert_eq!(adjust_hex("#000000", 25).unwrap(), "#191919");
}

#[test]
fn adjust_clamps_each_channel_independently() {
    let c = HexColor::rgb(0xf0, 0x10, 0x80).adjust(25);
    assert_eq!(c, HexColor::rgb(0xff, 0x29, 0x99));

    let c = HexColor::rgb(0xf0, 0x10, 0x80).adjust(-25);
    assert_eq!(c, HexColor::rgb(0xd7, 0x00, 0x67));
}

#[test]
fn adjust_border_blue_pair() {
    let base = HexColor::parse("#4a90e2").unwrap();
    assert_eq!(base.lighten(25).to_string(), "#63a9fb");
    assert_eq!(base.darken(25).to_string(), "#3177c9");
}

#[test]
fn parse_accepts_case_and_missing_hash() {
    assert_eq!(
        HexColor::parse("4A90E2").unwrap(),
        HexColor::rgb(0x4a, 0x90, 0xe2)
    );
    assert_eq!(
        " #f0F4f8 ".parse::<HexColor>().unwrap(),
        HexColor::rgb(0xf0, 0xf4, 0xf8)
    );
}

#[test]
fn parse_rejects_malformed() {
    for bad in ["", "#fff", "#12345", "#1234567", "#gg0000", "#ééé", "#+f+f+f", "# 12345"] {
        assert!(
            matches!(HexColor::parse(bad), Err(RoundelError::Validation(_))),
            "{bad:?} should be rejected"
        );
    }
}

#[test]
fn serde_uses_hex_strings() {
    let c: HexColor = serde_json::from_value(json!("#2d3748")).unwrap();
    assert_eq!(c, HexColor::rgb(0x2d, 0x37, 0x48));
    assert_eq!(serde_json::to_value(c).unwrap(), json!("#2d3748"));

    assert!(serde_json::from_value::<HexColor>(json!("red")).is_err());
}

#[test]
fn with_alpha_premultiplies() {
    assert_eq!(
        HexColor::BLACK.with_alpha(0.15),
        Rgba8Premul::from_straight_rgba(0, 0, 0, 38)
    );
    assert_eq!(
        HexColor::rgb(10, 20, 30).to_rgba8_premul(),
        Rgba8Premul::opaque(10, 20, 30)
    );
}
