use std::sync::{mpsc, Arc};

use tracker_core::{Effect, JobQuery, JobRecord, JobStatus, JobsPage, LoadError, Msg, Stats};
use tracker_engine::{ApiError, EngineEvent, EngineHandle, EventSink, JobsApi, ListJobsParams};
use tracker_logging::{tracker_debug, tracker_info};

use super::app::Inbox;
use super::ui::render::print_open_url;

/// Executes core effects on the engine and feeds engine events back as messages.
pub struct EffectRunner {
    engine: EngineHandle,
}

impl EffectRunner {
    pub fn new(api: Arc<dyn JobsApi>, inbox: mpsc::Sender<Inbox>) -> Self {
        let sink = Arc::new(InboxSink { inbox });
        Self {
            engine: EngineHandle::new(api, sink),
        }
    }

    pub fn run(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::FetchStats => self.engine.fetch_stats(),
                Effect::FetchSources => self.engine.fetch_sources(),
                Effect::FetchJobs { request_id, query } => {
                    tracker_debug!(
                        "FetchJobs request_id={} query={}",
                        request_id,
                        query.to_query_string()
                    );
                    self.engine.fetch_jobs(request_id, map_query(query));
                }
                Effect::UpdateJobStatus { job_id, status } => {
                    tracker_info!("UpdateJobStatus job_id={} status={}", job_id, status);
                    self.engine.update_status(job_id, map_status(status));
                }
                Effect::StartSearchDebounce { generation, delay } => {
                    self.engine.start_debounce(generation, delay);
                }
                Effect::OpenJobUrl { url } => {
                    tracker_info!("OpenJobUrl url_len={}", url.len());
                    print_open_url(&url);
                }
            }
        }
    }
}

struct InboxSink {
    inbox: mpsc::Sender<Inbox>,
}

impl EventSink for InboxSink {
    fn emit(&self, event: EngineEvent) {
        let _ = self.inbox.send(Inbox::Msg(map_event(event)));
    }
}

pub(crate) fn map_event(event: EngineEvent) -> Msg {
    match event {
        EngineEvent::StatsFetched(result) => {
            Msg::StatsLoaded(result.map(map_stats).map_err(load_error))
        }
        EngineEvent::SourcesFetched(result) => Msg::SourcesLoaded(result.map_err(load_error)),
        EngineEvent::JobsFetched { request_id, result } => Msg::JobsLoaded {
            request_id,
            result: result.map(map_page).map_err(load_error),
        },
        EngineEvent::StatusUpdated { job_id, result } => Msg::JobStatusUpdated {
            job_id,
            result: result.map_err(load_error),
        },
        EngineEvent::DebounceElapsed { generation } => Msg::SearchDebounceElapsed { generation },
    }
}

fn map_query(query: JobQuery) -> ListJobsParams {
    ListJobsParams {
        search: query.search,
        source: query.source,
        status: query.status,
        page: query.page,
        per_page: query.per_page,
    }
}

fn map_status(status: JobStatus) -> tracker_engine::JobStatus {
    match status {
        JobStatus::Pending => tracker_engine::JobStatus::Pending,
        JobStatus::Applied => tracker_engine::JobStatus::Applied,
        JobStatus::Failed => tracker_engine::JobStatus::Failed,
        JobStatus::Rejected => tracker_engine::JobStatus::Rejected,
    }
}

fn map_stats(stats: tracker_engine::Stats) -> Stats {
    Stats {
        total: stats.total,
        applied: stats.applied,
        pending: stats.pending,
        failed: stats.failed,
    }
}

fn map_page(page: tracker_engine::JobsPage) -> JobsPage {
    JobsPage {
        jobs: page.jobs.into_iter().map(map_job).collect(),
        total: page.total,
        page: page.page,
        total_pages: page.total_pages,
    }
}

fn map_job(job: tracker_engine::JobRecord) -> JobRecord {
    JobRecord {
        id: job.id,
        title: job.title,
        company: job.company,
        location: job.location,
        source_category: job.source_category,
        url: job.url,
        posted_date: job.posted_date,
        scraped_date: job.scraped_date,
        is_new: job.is_new,
    }
}

fn load_error(err: ApiError) -> LoadError {
    LoadError::new(err.to_string())
}
