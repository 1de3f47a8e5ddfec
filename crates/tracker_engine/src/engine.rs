use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use tokio::task::JoinHandle;
use tracker_logging::{tracker_debug, tracker_error, tracker_trace, tracker_warn};

use crate::{EngineEvent, JobId, JobStatus, JobsApi, ListJobsParams};

/// Receives engine events on the engine's worker threads.
pub trait EventSink: Send + Sync {
    fn emit(&self, event: EngineEvent);
}

/// Forwards events into a std channel.
pub struct ChannelEventSink {
    tx: mpsc::Sender<EngineEvent>,
}

impl ChannelEventSink {
    pub fn new(tx: mpsc::Sender<EngineEvent>) -> Self {
        Self { tx }
    }
}

impl EventSink for ChannelEventSink {
    fn emit(&self, event: EngineEvent) {
        let _ = self.tx.send(event);
    }
}

enum EngineCommand {
    FetchStats,
    FetchSources,
    FetchJobs {
        request_id: u64,
        params: ListJobsParams,
    },
    UpdateStatus {
        job_id: JobId,
        status: JobStatus,
    },
    Debounce {
        generation: u64,
        delay: Duration,
    },
}

/// Runs backend calls and timers on a private tokio runtime.
///
/// Requests are never cancelled once issued; a newer debounce command aborts
/// the previous timer.
#[derive(Clone)]
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
}

impl EngineHandle {
    pub fn new(api: Arc<dyn JobsApi>, sink: Arc<dyn EventSink>) -> Self {
        let (cmd_tx, cmd_rx) = mpsc::channel();

        thread::spawn(move || {
            let runtime = match tokio::runtime::Runtime::new() {
                Ok(runtime) => runtime,
                Err(err) => {
                    tracker_error!("Failed to start engine runtime: {}", err);
                    return;
                }
            };
            let mut debounce: Option<JoinHandle<()>> = None;

            while let Ok(command) = cmd_rx.recv() {
                match command {
                    EngineCommand::Debounce { generation, delay } => {
                        if let Some(previous) = debounce.take() {
                            previous.abort();
                        }
                        tracker_trace!("Debounce timer generation={} delay={:?}", generation, delay);
                        let sink = sink.clone();
                        debounce = Some(runtime.spawn(async move {
                            tokio::time::sleep(delay).await;
                            sink.emit(EngineEvent::DebounceElapsed { generation });
                        }));
                    }
                    command => {
                        let api = api.clone();
                        let sink = sink.clone();
                        runtime.spawn(async move {
                            handle_command(api.as_ref(), command, sink.as_ref()).await;
                        });
                    }
                }
            }
        });

        Self { cmd_tx }
    }

    pub fn fetch_stats(&self) {
        let _ = self.cmd_tx.send(EngineCommand::FetchStats);
    }

    pub fn fetch_sources(&self) {
        let _ = self.cmd_tx.send(EngineCommand::FetchSources);
    }

    pub fn fetch_jobs(&self, request_id: u64, params: ListJobsParams) {
        let _ = self
            .cmd_tx
            .send(EngineCommand::FetchJobs { request_id, params });
    }

    pub fn update_status(&self, job_id: JobId, status: JobStatus) {
        let _ = self
            .cmd_tx
            .send(EngineCommand::UpdateStatus { job_id, status });
    }

    /// Restarts the search debounce timer.
    pub fn start_debounce(&self, generation: u64, delay: Duration) {
        let _ = self
            .cmd_tx
            .send(EngineCommand::Debounce { generation, delay });
    }
}

async fn handle_command(api: &dyn JobsApi, command: EngineCommand, sink: &dyn EventSink) {
    match command {
        EngineCommand::FetchStats => {
            let result = api.stats().await;
            if let Err(err) = &result {
                tracker_warn!("Error fetching stats: {}", err);
            }
            sink.emit(EngineEvent::StatsFetched(result));
        }
        EngineCommand::FetchSources => {
            let result = api.sources().await;
            if let Err(err) = &result {
                tracker_warn!("Error fetching sources: {}", err);
            }
            sink.emit(EngineEvent::SourcesFetched(result));
        }
        EngineCommand::FetchJobs { request_id, params } => {
            tracker_debug!(
                "FetchJobs request_id={} page={} search_len={}",
                request_id,
                params.page,
                params.search.len()
            );
            let result = api.list_jobs(&params).await;
            if let Err(err) = &result {
                tracker_warn!("Error fetching jobs (request {}): {}", request_id, err);
            }
            sink.emit(EngineEvent::JobsFetched { request_id, result });
        }
        EngineCommand::UpdateStatus { job_id, status } => {
            let result = api.update_status(job_id, status).await;
            if let Err(err) = &result {
                tracker_warn!("Error updating job {} status: {}", job_id, err);
            }
            sink.emit(EngineEvent::StatusUpdated { job_id, result });
        }
        // Timers never reach the task pool.
        EngineCommand::Debounce { .. } => {}
    }
}
