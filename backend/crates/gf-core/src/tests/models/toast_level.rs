use crate::ToastLevel;

use std::str::FromStr;

#[test]
fn test_toast_level_as_str() {
    assert_eq!(ToastLevel::Info.as_str(), "info");
    assert_eq!(ToastLevel::Success.as_str(), "success");
    assert_eq!(ToastLevel::Warn.as_str(), "warn");
    assert_eq!(ToastLevel::Error.as_str(), "error");
}

#[test]
fn test_toast_level_from_str() {
    assert_eq!(ToastLevel::from_str("warn").unwrap(), ToastLevel::Warn);
    assert_eq!(ToastLevel::from_str("error").unwrap(), ToastLevel::Error);
    assert!(ToastLevel::from_str("fatal").is_err());
}

#[test]
fn test_toast_level_default_is_info() {
    assert_eq!(ToastLevel::default(), ToastLevel::Info);
    assert_eq!(ToastLevel::parse_or_default("fatal"), ToastLevel::Info);
}

#[test]
fn test_toast_level_palette() {
    let success = ToastLevel::Success.palette();
    assert_eq!(success.background, "#ecfdf5");
    assert_eq!(success.foreground, "#064e3b");
    assert_eq!(success.border, "#bbf7d0");

    assert_eq!(ToastLevel::Info.palette().background, "#f8fafc");
}
