//! Error types for cipher and cryptanalysis operations

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CipherError {
    #[error("Invalid key: {0}")]
    InvalidKey(String),

    #[error("Invalid pad: {0}")]
    InvalidPad(String),

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Unsupported mode: {0}")]
    UnsupportedMode(String),

    #[error("Unsupported language: {0}")]
    UnsupportedLanguage(String),

    #[error("Unsupported base type: {0}")]
    UnsupportedBase(String),

    #[error("Unsupported encoding type: {0}")]
    UnsupportedEncoding(String),

    #[error("Invalid dictionary source: {0}")]
    InvalidSource(String),

    #[error("Invalid blocks (must be equal size)")]
    InvalidBlocks,

    #[error("Text contains no symbols to analyze")]
    EmptyText,

    #[error("{0} cryptanalysis failed")]
    CryptanalysisFailed(&'static str),
}

pub type Result<T> = std::result::Result<T, CipherError>;
