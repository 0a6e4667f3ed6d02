use super::*;
use serde_json::json;

#[test]
fn parses_hex_case_insensitive() {
    let c: Color = serde_json::from_value(json!("#ff0000")).unwrap();
    assert_eq!(c, Color::rgb(255, 0, 0));

    let c: Color = "#0F172A".parse().unwrap();
    assert_eq!(c, Color::rgb(0x0f, 0x17, 0x2a));
}

#[test]
fn rejects_malformed_hex() {
    for bad in [
        "ff0000",
        "#ff00",
        "#ff000080",
        "#gg0000",
        "#ffé000",
        "",
        "#+f+f+f",
        "#-1-1-1",
        "# fffff",
    ] {
        assert!(bad.parse::<Color>().is_err(), "{bad} should be rejected");
    }
    assert!(serde_json::from_value::<Color>(json!(12)).is_err());
}

#[test]
fn serializes_lowercase_hex() {
    let v = serde_json::to_value(Color::rgb(0xAB, 0x01, 0xff)).unwrap();
    assert_eq!(v, json!("#ab01ff"));
    assert_eq!(Color::WHITE.to_string(), "#ffffff");
}

#[test]
fn rgba_floats_clamp_alpha() {
    let [r, g, b, a] = Color::rgb(255, 0, 51).to_rgba_f64(1.5);
    assert_eq!((r, g, a), (1.0, 0.0, 1.0));
    assert!((b - 0.2).abs() < 1e-12);
}
