use hvadan_logging::{hv_debug, hv_info, hv_warn};

use crate::decode::{decode_text, DecodeError};
use crate::fetch::{Fetcher, ProgressSink};
use crate::payload::{records_from_payload, PayloadError};
use crate::{EngineEvent, FetchError, LoadOutcome, RequestId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceAttempt {
    pub source: String,
    pub reason: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LoadError {
    #[error("no data sources configured")]
    NoSources,
    #[error("all {} data sources failed", .attempts.len())]
    AllSourcesFailed { attempts: Vec<SourceAttempt> },
}

#[derive(Debug, thiserror::Error)]
enum AttemptError {
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error(transparent)]
    Decode(#[from] DecodeError),
    #[error(transparent)]
    Payload(#[from] PayloadError),
    #[error("no usable rows")]
    Empty,
}

/// Try each source in order until one yields at least one record.
pub async fn load_from_sources(
    fetcher: &dyn Fetcher,
    request_id: RequestId,
    sources: &[String],
    sink: &dyn ProgressSink,
) -> Result<LoadOutcome, LoadError> {
    if sources.is_empty() {
        return Err(LoadError::NoSources);
    }

    let mut attempts = Vec::new();
    for source in sources {
        hv_debug!("request {} fetching {}", request_id, source);
        match load_one(fetcher, request_id, source, sink).await {
            Ok(outcome) => {
                hv_info!(
                    "request {} loaded {} records from {} ({:?}, {} bytes)",
                    request_id,
                    outcome.records.len(),
                    outcome.metadata.final_url,
                    outcome.metadata.format,
                    outcome.metadata.byte_len
                );
                return Ok(outcome);
            }
            Err(err) => {
                hv_warn!("request {} source {} failed: {}", request_id, source, err);
                sink.emit(EngineEvent::SourceFailed {
                    request_id,
                    source: source.clone(),
                    reason: err.to_string(),
                });
                attempts.push(SourceAttempt {
                    source: source.clone(),
                    reason: err.to_string(),
                });
            }
        }
    }

    Err(LoadError::AllSourcesFailed { attempts })
}

async fn load_one(
    fetcher: &dyn Fetcher,
    request_id: RequestId,
    source: &str,
    sink: &dyn ProgressSink,
) -> Result<LoadOutcome, AttemptError> {
    let output = fetcher.fetch(request_id, source, sink).await?;
    let metadata = &output.metadata;
    let decoded = decode_text(&output.bytes, metadata.content_type.as_deref())?;
    hv_debug!(
        "request {} decoded {} as {}",
        request_id,
        source,
        decoded.encoding_label
    );

    let records = records_from_payload(&decoded.text, metadata.format)?;
    if records.is_empty() {
        return Err(AttemptError::Empty);
    }
    Ok(LoadOutcome {
        source: source.to_string(),
        records,
        metadata: output.metadata,
    })
}
