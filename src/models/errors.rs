use thiserror::Error;

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("Unknown transaction kind [{0}]")]
    UnknownKind(String),
    #[error("Unknown transaction status [{0}]")]
    UnknownStatus(String)
}

impl ParseError {
    pub fn unknown_kind(value: &str) -> Self {
        Self::UnknownKind(value.to_string())
    }

    pub fn unknown_status(value: &str) -> Self {
        Self::UnknownStatus(value.to_string())
    }
}
