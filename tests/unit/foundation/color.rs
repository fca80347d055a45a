use super::*;

#[test]
fn hex_parses_with_and_without_hash() {
    assert_eq!(
        Color::from_hex("#6366F1").unwrap(),
        Color::rgb(0x63, 0x66, 0xF1)
    );
    assert_eq!(
        Color::from_hex("1e1e2e").unwrap(),
        Color::rgb(0x1E, 0x1E, 0x2E)
    );
}

#[test]
fn hex_rejects_bad_input() {
    assert!(Color::from_hex("#12345").is_err());
    assert!(Color::from_hex("#GGGGGG").is_err());
    assert!(Color::from_hex("#12345678").is_err());
}

#[test]
fn to_hex_is_lowercase_and_stable() {
    assert_eq!(Color::rgb(0x10, 0xB9, 0x81).to_hex(), "#10b981");
    assert_eq!(Color::WHITE.to_string(), "#ffffff");
}
