use std::fmt;

use hvadan_core::CountryRecord;

use crate::load::LoadError;
use crate::payload::PayloadFormat;

pub use hvadan_core::RequestId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadProgress {
    pub request_id: RequestId,
    pub source: String,
    pub bytes: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub enum EngineEvent {
    Progress(LoadProgress),
    /// One source failed; the loader moves on to the next one.
    SourceFailed {
        request_id: RequestId,
        source: String,
        reason: String,
    },
    LoadCompleted {
        request_id: RequestId,
        result: Result<LoadOutcome, LoadError>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadOutcome {
    pub source: String,
    pub records: Vec<CountryRecord>,
    pub metadata: FetchMetadata,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchOutput {
    pub bytes: Vec<u8>,
    pub metadata: FetchMetadata,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchMetadata {
    /// Where the body came from after redirects.
    pub final_url: String,
    pub content_type: Option<String>,
    pub format: PayloadFormat,
    pub byte_len: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind}: {message}")]
pub struct FetchError {
    pub kind: FailureKind,
    pub message: String,
}

impl FetchError {
    pub(crate) fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureKind {
    InvalidUrl,
    HttpStatus(u16),
    Timeout,
    RedirectLimitExceeded,
    TooLarge { max_bytes: u64, actual: Option<u64> },
    UnsupportedContentType { content_type: String },
    Network,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::InvalidUrl => write!(f, "invalid url"),
            FailureKind::HttpStatus(code) => write!(f, "http status {code}"),
            FailureKind::Timeout => write!(f, "timeout"),
            FailureKind::RedirectLimitExceeded => write!(f, "redirect limit exceeded"),
            FailureKind::TooLarge { max_bytes, actual } => {
                write!(f, "response too large (max {max_bytes}, actual {actual:?})")
            }
            FailureKind::UnsupportedContentType { content_type } => {
                write!(f, "unsupported content type {content_type}")
            }
            FailureKind::Network => write!(f, "network error"),
        }
    }
}
