use miette::Diagnostic;
use thiserror::Error;

/// Main error type for decor operations
#[derive(Error, Diagnostic, Debug)]
pub enum DecorError {
    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(decor::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Unable to decode image: {message}")]
    #[diagnostic(code(decor::decode), help("Supply a PNG or JPEG file"))]
    Decode { message: String },

    #[error("Unable to encode image: {message}")]
    #[diagnostic(code(decor::encode))]
    Encode { message: String },

    #[error("Invalid input: {message}")]
    #[diagnostic(code(decor::input))]
    InvalidInput {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Invalid argument: {message}")]
    #[diagnostic(code(decor::argument))]
    InvalidArgument {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Parse error: {message}")]
    #[diagnostic(code(decor::parse))]
    Parse {
        message: String,
        #[help]
        help: Option<String>,
    },
}

pub type Result<T> = std::result::Result<T, DecorError>;
