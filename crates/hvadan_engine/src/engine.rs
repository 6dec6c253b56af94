use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use hvadan_logging::hv_error;

use crate::fetch::{ChannelProgressSink, FetchSettings, Fetcher, ReqwestFetcher};
use crate::load::load_from_sources;
use crate::{EngineEvent, RequestId};

/// The worker thread is gone, so no further events will arrive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("the loader thread has stopped")]
pub struct EngineStopped;

enum EngineCommand {
    Load {
        request_id: RequestId,
        sources: Vec<String>,
    },
}

/// Background loader: a worker thread driving a tokio runtime.
///
/// Dropping the handle closes the command channel and lets the worker exit.
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_rx: mpsc::Receiver<EngineEvent>,
}

impl EngineHandle {
    pub fn new(settings: FetchSettings) -> Self {
        Self::with_fetcher(Arc::new(ReqwestFetcher::new(settings)))
    }

    pub fn with_fetcher(fetcher: Arc<dyn Fetcher>) -> Self {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();

        thread::spawn(move || {
            let runtime = match tokio::runtime::Runtime::new() {
                Ok(runtime) => runtime,
                Err(err) => {
                    hv_error!("failed to start loader runtime: {}", err);
                    return;
                }
            };
            while let Ok(command) = cmd_rx.recv() {
                let fetcher = fetcher.clone();
                let event_tx = event_tx.clone();
                runtime.spawn(async move {
                    handle_command(fetcher.as_ref(), command, event_tx).await;
                });
            }
        });

        Self { cmd_tx, event_rx }
    }

    /// Queue a load; the answer arrives as [`EngineEvent::LoadCompleted`].
    pub fn load(&self, request_id: RequestId, sources: Vec<String>) -> Result<(), EngineStopped> {
        self.cmd_tx
            .send(EngineCommand::Load { request_id, sources })
            .map_err(|_| EngineStopped)
    }

    pub fn try_recv(&self) -> Option<EngineEvent> {
        self.event_rx.try_recv().ok()
    }

    /// Wait up to `timeout` for the next event. `Ok(None)` means nothing arrived in time.
    pub fn recv_timeout(&self, timeout: Duration) -> Result<Option<EngineEvent>, EngineStopped> {
        match self.event_rx.recv_timeout(timeout) {
            Ok(event) => Ok(Some(event)),
            Err(mpsc::RecvTimeoutError::Timeout) => Ok(None),
            Err(mpsc::RecvTimeoutError::Disconnected) => Err(EngineStopped),
        }
    }
}

async fn handle_command(
    fetcher: &dyn Fetcher,
    command: EngineCommand,
    event_tx: mpsc::Sender<EngineEvent>,
) {
    match command {
        EngineCommand::Load {
            request_id,
            sources,
        } => {
            let sink = ChannelProgressSink::new(event_tx.clone());
            let result = load_from_sources(fetcher, request_id, &sources, &sink).await;
            let _ = event_tx.send(EngineEvent::LoadCompleted { request_id, result });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn handle_without_worker() -> EngineHandle {
        let (cmd_tx, _) = mpsc::channel();
        let (_, event_rx) = mpsc::channel();
        EngineHandle { cmd_tx, event_rx }
    }

    #[test]
    fn stopped_worker_is_reported_instead_of_waiting() {
        let engine = handle_without_worker();
        assert_eq!(engine.load(1, vec!["mem://sheet".to_string()]), Err(EngineStopped));
        assert_eq!(engine.recv_timeout(Duration::from_secs(30)), Err(EngineStopped));
        assert_eq!(engine.try_recv(), None);
    }

    #[test]
    fn idle_worker_times_out_quietly() {
        let engine = EngineHandle::new(FetchSettings::default());
        assert_eq!(engine.recv_timeout(Duration::from_millis(20)), Ok(None));
    }
}
