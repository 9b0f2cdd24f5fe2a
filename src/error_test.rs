use super::*;
use crate::config::BubbleConfig;

#[test]
fn config_errors_pass_through_transparently() {
    let inner = BubbleConfig::from_json(r#"{"gap": 1}"#).unwrap_err();
    let message = inner.to_string();
    let err = BubbleError::from(inner);
    assert!(matches!(err, BubbleError::Config(_)));
    assert_eq!(err.to_string(), message);
}

#[test]
fn template_errors_pass_through_transparently() {
    let err = BubbleError::from(TemplateError::UnknownField("x".into()));
    assert_eq!(err.to_string(), "unknown template field: x");
}

#[test]
fn missing_host_objects_have_messages() {
    assert_eq!(BubbleError::MissingWindow.to_string(), "no global window");
    assert_eq!(BubbleError::MissingDocument.to_string(), "window has no document");
    assert_eq!(BubbleError::MissingBody.to_string(), "document has no body");
    assert_eq!(BubbleError::Busy.to_string(), "bubble is busy");
}

#[test]
fn dom_errors_carry_the_browser_message() {
    let err = BubbleError::Dom("NotFoundError".into());
    assert_eq!(err.to_string(), "dom call failed: NotFoundError");
}
