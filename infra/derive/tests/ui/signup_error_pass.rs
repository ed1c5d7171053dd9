use signup_derive::signup_error;
use std::borrow::Cow;

#[signup_error]
pub enum DemoError {
    #[error("IO error{}: {source}", format_context(.context))]
    Io {
        #[source]
        source: std::io::Error,
        context: Option<Cow<'static, str>>,
    },

    #[error("Internal error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

fn read_missing() -> Result<Vec<u8>, DemoError> {
    std::fs::read("/definitely/not/here").context("Reading demo file")
}

fn main() {
    let err = read_missing().expect_err("file must be missing");
    assert!(err.to_string().contains("(Reading demo file)"));

    let internal: DemoError = "boom".into();
    let internal: Result<(), DemoError> = Err(internal);
    let rendered = internal.context("while testing").expect_err("still an error").to_string();
    assert_eq!(rendered, "Internal error (while testing): boom");
}
