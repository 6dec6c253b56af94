//! Hvadan engine: fetching, decoding and the background loader.
mod decode;
mod engine;
mod fetch;
mod load;
mod payload;
mod types;

pub use decode::{decode_text, DecodeError, DecodedText};
pub use engine::{EngineHandle, EngineStopped};
pub use fetch::{FetchSettings, Fetcher, ProgressSink, ReqwestFetcher};
pub use load::{load_from_sources, LoadError, SourceAttempt};
pub use payload::{records_from_payload, PayloadError, PayloadFormat};
pub use types::{
    EngineEvent, FailureKind, FetchError, FetchMetadata, FetchOutput, LoadOutcome, LoadProgress,
    RequestId,
};
