use mmrag_derive::mmrag_error;
use std::borrow::Cow;

#[mmrag_error]
pub enum RenderError {
    #[error("Write error{}: {source}", format_context(.context))]
    Write {
        #[source]
        source: std::fmt::Error,
        context: Option<Cow<'static, str>>,
    },

    #[error("Internal error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

fn write_heading() -> Result<(), std::fmt::Error> {
    Err(std::fmt::Error)
}

fn render() -> Result<(), RenderError> {
    write_heading().context("heading")?;
    Err("unreachable branch".into())
}

fn main() {
    let err = render().unwrap_err();
    assert!(matches!(err, RenderError::Write { .. }));
    assert_eq!(err.context_note(), Some("heading"));

    let from_string: RenderError = String::from("boom").into();
    assert!(matches!(from_string, RenderError::Internal { .. }));
}
