use std::time::Duration;

use hvadan_core::{Effect, Msg};
use hvadan_engine::{EngineEvent, EngineHandle, EngineStopped, LoadError};
use hvadan_logging::{hv_debug, hv_error, hv_info, hv_warn};

pub struct EffectRunner {
    engine: EngineHandle,
    sources: Vec<String>,
}

impl EffectRunner {
    pub fn new(engine: EngineHandle, sources: Vec<String>) -> Self {
        Self { engine, sources }
    }

    pub fn run(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::FetchData { request_id } => {
                    hv_info!(
                        "FetchData request_id={} sources={}",
                        request_id,
                        self.sources.len()
                    );
                    // A stopped loader also shows up on the next receive.
                    if let Err(err) = self.engine.load(request_id, self.sources.clone()) {
                        hv_error!("FetchData request_id={} not queued: {}", request_id, err);
                    }
                }
            }
        }
    }

    /// Next reducer message from the engine, if one arrives within `timeout`.
    pub fn next_msg(&self, timeout: Duration) -> Result<Option<Msg>, EngineStopped> {
        let event = self.engine.recv_timeout(timeout)?;
        Ok(event.map(|event| event_to_msg(event).unwrap_or(Msg::Tick)))
    }
}

pub fn event_to_msg(event: EngineEvent) -> Option<Msg> {
    match event {
        EngineEvent::Progress(progress) => {
            hv_debug!(
                "request {} read {} bytes from {}",
                progress.request_id,
                progress.bytes,
                progress.source
            );
            None
        }
        EngineEvent::SourceFailed {
            request_id,
            source,
            reason,
        } => {
            hv_warn!("request {} falling back after {}: {}", request_id, source, reason);
            None
        }
        EngineEvent::LoadCompleted { request_id, result } => Some(match result {
            Ok(outcome) => Msg::DataLoaded {
                request_id,
                records: outcome.records,
            },
            Err(err) => Msg::LoadFailed {
                request_id,
                message: failure_message(&err),
            },
        }),
    }
}

fn failure_message(err: &LoadError) -> String {
    match err {
        LoadError::NoSources => {
            "No data source configured. Pass --source or set `sources` in the config.".to_string()
        }
        LoadError::AllSourcesFailed { attempts } => {
            let details: Vec<String> = attempts
                .iter()
                .map(|attempt| format!("{} ({})", attempt.source, attempt.reason))
                .collect();
            format!("Failed to load country data: {}", details.join("; "))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hvadan_core::CountryRecord;
    use hvadan_engine::{FetchMetadata, LoadOutcome, LoadProgress, PayloadFormat, SourceAttempt};

    #[test]
    fn progress_and_fallback_events_do_not_reach_the_reducer() {
        let progress = EngineEvent::Progress(LoadProgress {
            request_id: 1,
            source: "https://a.test".to_string(),
            bytes: 10,
        });
        assert_eq!(event_to_msg(progress), None);

        let failed = EngineEvent::SourceFailed {
            request_id: 1,
            source: "https://a.test".to_string(),
            reason: "timeout".to_string(),
        };
        assert_eq!(event_to_msg(failed), None);
    }

    #[test]
    fn completed_load_becomes_data_loaded() {
        let records = vec![CountryRecord::new("Iceland", "Íslandi", ["íslensku"]).unwrap()];
        let event = EngineEvent::LoadCompleted {
            request_id: 4,
            result: Ok(LoadOutcome {
                source: "https://a.test".to_string(),
                records: records.clone(),
                metadata: FetchMetadata {
                    final_url: "https://a.test".to_string(),
                    content_type: None,
                    format: PayloadFormat::Csv,
                    byte_len: 0,
                },
            }),
        };
        assert_eq!(
            event_to_msg(event),
            Some(Msg::DataLoaded {
                request_id: 4,
                records
            })
        );
    }

    #[test]
    fn failed_load_lists_each_source() {
        let event = EngineEvent::LoadCompleted {
            request_id: 2,
            result: Err(LoadError::AllSourcesFailed {
                attempts: vec![
                    SourceAttempt {
                        source: "https://a.test".to_string(),
                        reason: "timeout: slow".to_string(),
                    },
                    SourceAttempt {
                        source: "https://b.test".to_string(),
                        reason: "no usable rows".to_string(),
                    },
                ],
            }),
        };
        assert_eq!(
            event_to_msg(event),
            Some(Msg::LoadFailed {
                request_id: 2,
                message: "Failed to load country data: https://a.test (timeout: slow); \
                          https://b.test (no usable rows)"
                    .to_string(),
            })
        );
    }
}
