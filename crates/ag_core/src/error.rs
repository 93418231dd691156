use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("API key is not configured")]
    MissingCredential,

    #[error("API key was rejected: {0}")]
    InvalidCredential(String),

    #[error("API quota exhausted: {0}")]
    QuotaExhausted(String),

    #[error("Generation returned an empty response")]
    EmptyResponse,

    #[error("Generation request failed: {0}")]
    Transport(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Rich clipboard write failed: {0}")]
    ClipboardRichWrite(String),

    #[error("Plain clipboard write failed: {0}")]
    ClipboardPlainWrite(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl Error {
    /// Message shown to the person using the app. Each failure kind gets one.
    pub fn user_message(&self) -> String {
        match self {
            Error::MissingCredential => {
                "The Gemini API key is not set. Set GEMINI_API_KEY in the environment and try again.".to_string()
            }
            Error::InvalidCredential(_) => {
                "The API key is invalid. Check the key configured in the environment.".to_string()
            }
            Error::QuotaExhausted(_) => {
                "The API usage quota has been exhausted. Try again later or check your quota.".to_string()
            }
            Error::EmptyResponse => "The response received from Gemini was empty.".to_string(),
            Error::Transport(msg) => format!("Error communicating with Gemini: {}", msg),
            Error::Http(err) => format!("Error communicating with Gemini: {}", err),
            Error::ClipboardRichWrite(_) => {
                "Article copied as plain text only. Rich text copy is not supported here.".to_string()
            }
            Error::ClipboardPlainWrite(_) => "Failed to copy the article to the clipboard.".to_string(),
            Error::InvalidRequest(msg) => msg.clone(),
            Error::Io(err) => format!("Could not read input: {}", err),
            Error::Serialization(err) => format!("Unexpected data format: {}", err),
        }
    }

    /// True for failures of the generation call itself.
    pub fn is_generation_failure(&self) -> bool {
        matches!(
            self,
            Error::MissingCredential
                | Error::InvalidCredential(_)
                | Error::QuotaExhausted(_)
                | Error::EmptyResponse
                | Error::Transport(_)
                | Error::Http(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, Error>;
