use thiserror::Error;

#[derive(Error, Debug)]
pub enum FlashdeckError {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Reqwest error: {0}")]
    Reqwest(Box<reqwest::Error>),

    #[error("HTTP error {status} from {url}")]
    HttpStatus { status: u16, url: String },

    #[error("Could not load set: {0}")]
    FailedToLoadSet(String),

    #[error("FlashdeckError: {0}")]
    Custom(String),
}

impl From<reqwest::Error> for FlashdeckError {
    fn from(error: reqwest::Error) -> Self {
        FlashdeckError::Reqwest(Box::new(error))
    }
}
