use std::borrow::Cow;

#[mmrag_derive::mmrag_error]
pub enum AssistantError {
    /// No engine is wired in; the feature is not offered.
    #[error("Unavailable{}: {message}", format_context(.context))]
    Unavailable { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Invalid input{}: {message}", format_context(.context))]
    InvalidInput { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Internal error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
