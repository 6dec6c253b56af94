use std::time::{Duration, Instant};

use anyhow::bail;
use hvadan_core::{update, LoadStatus, Msg, WidgetState};
use hvadan_engine::EngineHandle;
use hvadan_logging::{hv_error, hv_info, hv_warn};

use crate::cli::Cli;
use crate::config::{load_config, FetchConfig};
use crate::effects::EffectRunner;
use crate::logging;
use crate::render::{render_options, render_selection, render_status};

const POLL_INTERVAL: Duration = Duration::from_millis(100);
const WAIT_SLACK: Duration = Duration::from_secs(5);
const TIMED_OUT_MESSAGE: &str = "Timed out waiting for country data.";
const LOADER_STOPPED_MESSAGE: &str = "The loader stopped before answering.";

pub fn run(cli: Cli) -> anyhow::Result<()> {
    let mut config = load_config(&cli.config)?;
    logging::initialize(&config.log, cli.log)?;

    if !cli.sources.is_empty() {
        config.sources = cli.sources.clone();
    }
    if let Some(retries) = cli.retries {
        config.retries = retries;
    }
    hv_info!(
        "starting with {} sources, {} retries",
        config.sources.len(),
        config.retries
    );

    let engine = EngineHandle::new(config.fetch.to_settings());
    let wait_budget = load_budget(&config.fetch, config.sources.len());
    let mut session = Session::new(EffectRunner::new(engine, config.sources.clone()));

    session.dispatch(Msg::LoadRequested);
    let mut retries_left = config.retries;
    loop {
        session.wait_while_loading(wait_budget);
        match session.state.status().clone() {
            LoadStatus::Ready => break,
            LoadStatus::Failed(message) if retries_left > 0 => {
                hv_warn!("load failed, retrying: {}", message);
                retries_left -= 1;
                session.dispatch(Msg::RetryClicked);
            }
            LoadStatus::Failed(message) => bail!(message),
            LoadStatus::Idle | LoadStatus::Loading => {
                bail!("loader stopped without an answer")
            }
        }
    }

    if cli.json {
        println!("{}", serde_json::to_string_pretty(session.state.records())?);
        return Ok(());
    }

    if let Some(term) = cli.search {
        session.dispatch(Msg::SearchChanged(term));
        println!("{}", render_options(&session.state.view()));
        return Ok(());
    }

    let Some(country) = cli.country else {
        println!("{}", render_status(&session.state.view()));
        println!("{}", render_options(&session.state.view()));
        return Ok(());
    };

    session.dispatch(Msg::CountrySelected(country.clone()));
    if session.state.selected_record().is_none() {
        hv_warn!("country {:?} is not in the sheet", country);
    }
    if let Some(language) = cli.language {
        session.dispatch(Msg::LanguageSelected(language));
    }
    println!("{}", render_selection(&session.state.view()));
    Ok(())
}

/// Worst case for one load: every source used up its full timeout budget.
fn load_budget(fetch: &FetchConfig, sources: usize) -> Duration {
    let per_source = fetch.attempt_budget();
    per_source
        .checked_mul(u32::try_from(sources.max(1)).unwrap_or(u32::MAX))
        .unwrap_or(Duration::MAX)
        .saturating_add(WAIT_SLACK)
}

struct Session {
    state: WidgetState,
    runner: EffectRunner,
}

impl Session {
    fn new(runner: EffectRunner) -> Self {
        Self {
            state: WidgetState::new(),
            runner,
        }
    }

    fn dispatch(&mut self, msg: Msg) {
        let state = std::mem::take(&mut self.state);
        let (state, effects) = update(state, msg);
        self.state = state;
        self.runner.run(effects);
    }

    fn wait_while_loading(&mut self, budget: Duration) {
        let started = Instant::now();
        while *self.state.status() == LoadStatus::Loading {
            if started.elapsed() >= budget {
                self.fail_pending(TIMED_OUT_MESSAGE);
                return;
            }
            match self.runner.next_msg(POLL_INTERVAL) {
                Ok(Some(msg)) => self.dispatch(msg),
                Ok(None) => {}
                Err(err) => {
                    hv_error!("giving up on request {}: {}", self.state.request_id(), err);
                    self.fail_pending(LOADER_STOPPED_MESSAGE);
                    return;
                }
            }
        }
    }

    fn fail_pending(&mut self, message: &str) {
        let request_id = self.state.request_id();
        self.dispatch(Msg::LoadFailed {
            request_id,
            message: message.to_string(),
        });
    }
}
