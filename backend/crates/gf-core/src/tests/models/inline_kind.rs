use crate::InlineKind;

#[test]
fn test_inline_kind_default_is_error() {
    assert_eq!(InlineKind::default(), InlineKind::Error);
    assert_eq!(InlineKind::parse_or_default("info"), InlineKind::Error);
}

#[test]
fn test_inline_kind_class_list() {
    assert_eq!(InlineKind::Success.class_list(), "inline-alert inline-success");
    assert_eq!(InlineKind::Warn.class_list(), "inline-alert inline-warn");
    assert_eq!(InlineKind::Error.class_list(), "inline-alert inline-error");
}

#[test]
fn test_inline_kind_from_str() {
    assert_eq!("success".parse::<InlineKind>().unwrap(), InlineKind::Success);
    assert!("info".parse::<InlineKind>().is_err());
}
