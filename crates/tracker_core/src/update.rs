use crate::{AppState, Effect, JobStatus, Msg};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::Started | Msg::RefreshClicked => {
            let jobs = state.issue_jobs_fetch();
            vec![Effect::FetchStats, Effect::FetchSources, jobs]
        }
        Msg::AutoRefreshTick => {
            let jobs = state.issue_jobs_fetch();
            vec![Effect::FetchStats, jobs]
        }
        Msg::SearchInput(text) => {
            let generation = state.queue_search(text);
            vec![Effect::StartSearchDebounce {
                generation,
                delay: state.search_debounce(),
            }]
        }
        Msg::SearchDebounceElapsed { generation } => match state.take_pending_search(generation) {
            Some(text) => {
                state.apply_search(text);
                vec![state.issue_jobs_fetch()]
            }
            None => Vec::new(),
        },
        Msg::SearchCleared => {
            state.cancel_pending_search();
            state.apply_search(String::new());
            vec![state.issue_jobs_fetch()]
        }
        Msg::SourceChipSelected(value) => {
            if state.select_source(&value) {
                vec![state.issue_jobs_fetch()]
            } else {
                Vec::new()
            }
        }
        Msg::StatusChipSelected(value) => {
            if state.select_status(&value) {
                vec![state.issue_jobs_fetch()]
            } else {
                Vec::new()
            }
        }
        Msg::NextPageClicked => {
            if state.advance_page() {
                vec![state.issue_jobs_fetch()]
            } else {
                Vec::new()
            }
        }
        Msg::PrevPageClicked => {
            if state.retreat_page() {
                vec![state.issue_jobs_fetch()]
            } else {
                Vec::new()
            }
        }
        Msg::ApplyClicked { job_id } => {
            let mut effects = vec![Effect::UpdateJobStatus {
                job_id,
                status: JobStatus::Applied,
            }];
            if let Some(job) = state.job(job_id) {
                effects.push(Effect::OpenJobUrl {
                    url: job.url.clone(),
                });
            }
            effects
        }
        Msg::JobsLoaded { request_id, result } => {
            state.apply_jobs(request_id, result);
            Vec::new()
        }
        Msg::StatsLoaded(result) => {
            if let Ok(stats) = result {
                state.set_stats(stats);
            }
            Vec::new()
        }
        Msg::SourcesLoaded(result) => {
            if let Ok(sources) = result {
                state.set_sources(sources);
            }
            Vec::new()
        }
        // Only the counters move; the job list stays as rendered.
        Msg::JobStatusUpdated { result, .. } => match result {
            Ok(()) => vec![Effect::FetchStats],
            Err(_) => Vec::new(),
        },
    };

    (state, effects)
}
