use mmrag_derive::mmrag_error;
use std::borrow::Cow;

#[mmrag_error]
pub enum SessionError {
    #[error("Ordering error{}: {message}", format_context(.context))]
    Ordering { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Closed")]
    Closed {},
}

fn main() {
    let result: Result<(), SessionError> =
        Err(SessionError::Ordering { message: "not configured".into(), context: None });
    let err = result.context("render_title").unwrap_err();
    assert_eq!(err.context_note(), Some("render_title"));
    assert_eq!(err.to_string(), "Ordering error (render_title): not configured");
    assert_eq!(SessionError::Closed {}.context_note(), None);
}
