use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
pub enum Error {
    #[error("Missing API key. Set one of: GEMINI_API_KEY or GOOGLE_API_KEY")]
    MissingApiKey,

    #[error("Gemini API error: {0}")]
    Api(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}
