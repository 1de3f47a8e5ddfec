use std::time::Duration;

use chrono::{Local, NaiveDateTime};

use crate::view_model::{self, AppViewModel, ChipView};
use crate::{Effect, JobId, JobQuery, JobRecord, JobsPage, LoadError, RequestId, Stats, PER_PAGE};

/// Wildcard filter value.
pub const ALL: &str = "all";

/// Status vocabulary accepted by the backend.
pub const STATUS_VALUES: [&str; 4] = ["pending", "applied", "failed", "rejected"];

/// Idle window after the last keystroke before a search applies.
pub const SEARCH_DEBOUNCE: Duration = Duration::from_millis(500);

/// Notification shown when the jobs list cannot be loaded.
pub const JOBS_LOAD_FAILED: &str = "Failed to load jobs. Please try again.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterState {
    pub search: String,
    pub source: String,
    pub status: String,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            search: String::new(),
            source: ALL.to_string(),
            status: ALL.to_string(),
        }
    }
}

/// Invariant: `1 <= current_page`, `1 <= total_pages`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageCursor {
    pub current_page: u32,
    pub total_pages: u32,
}

impl Default for PageCursor {
    fn default() -> Self {
        Self {
            current_page: 1,
            total_pages: 1,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppState {
    filters: FilterState,
    cursor: PageCursor,
    /// Page and total of the last successful jobs response.
    shown_page: PageCursor,
    search_debounce: Duration,
    pending_search: Option<String>,
    search_generation: u64,
    sources: Vec<String>,
    jobs: Vec<JobRecord>,
    total_jobs: Option<u64>,
    stats: Option<Stats>,
    last_jobs_request: RequestId,
    jobs_in_flight: bool,
    notification: Option<String>,
    dirty: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            filters: FilterState::default(),
            cursor: PageCursor::default(),
            shown_page: PageCursor::default(),
            search_debounce: SEARCH_DEBOUNCE,
            pending_search: None,
            search_generation: 0,
            sources: Vec::new(),
            jobs: Vec::new(),
            total_jobs: None,
            stats: None,
            last_jobs_request: 0,
            jobs_in_flight: false,
            notification: None,
            dirty: false,
        }
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search_debounce(mut self, delay: Duration) -> Self {
        self.search_debounce = delay;
        self
    }

    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    pub fn cursor(&self) -> PageCursor {
        self.cursor
    }

    pub fn jobs(&self) -> &[JobRecord] {
        &self.jobs
    }

    pub fn stats(&self) -> Option<Stats> {
        self.stats
    }

    pub fn search_debounce(&self) -> Duration {
        self.search_debounce
    }

    pub fn job(&self, job_id: JobId) -> Option<&JobRecord> {
        self.jobs.iter().find(|job| job.id == job_id)
    }

    /// The query the next jobs fetch will carry.
    pub fn query(&self) -> JobQuery {
        JobQuery {
            search: self.filters.search.clone(),
            source: self.filters.source.clone(),
            status: self.filters.status.clone(),
            page: self.cursor.current_page,
            per_page: PER_PAGE,
        }
    }

    pub fn view(&self) -> AppViewModel {
        self.view_at(Local::now().naive_local())
    }

    /// Builds the view model with relative dates computed against `now`.
    pub fn view_at(&self, now: NaiveDateTime) -> AppViewModel {
        AppViewModel {
            stats: self.stats.map(Into::into),
            search: self
                .pending_search
                .clone()
                .unwrap_or_else(|| self.filters.search.clone()),
            source_chips: self.source_chips(),
            status_chips: self.status_chips(),
            cards: view_model::build_cards(&self.jobs, now),
            show_empty_state: self.total_jobs.is_some() && self.jobs.is_empty(),
            jobs_count_label: view_model::jobs_count_label(self.total_jobs.unwrap_or(0)),
            pagination: view_model::build_pagination(self.shown_page),
            loading: self.jobs_in_flight,
            dirty: self.dirty,
        }
    }

    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    /// Returns the pending blocking notification, clearing it.
    pub fn take_notification(&mut self) -> Option<String> {
        self.notification.take()
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub(crate) fn issue_jobs_fetch(&mut self) -> Effect {
        self.last_jobs_request += 1;
        self.jobs_in_flight = true;
        self.mark_dirty();
        Effect::FetchJobs {
            request_id: self.last_jobs_request,
            query: self.query(),
        }
    }

    /// Records keystrokes and returns the generation of the debounce timer to start.
    pub(crate) fn queue_search(&mut self, text: String) -> u64 {
        self.pending_search = Some(text);
        self.search_generation += 1;
        self.search_generation
    }

    /// Yields the pending text only for the latest debounce generation.
    pub(crate) fn take_pending_search(&mut self, generation: u64) -> Option<String> {
        if generation != self.search_generation {
            return None;
        }
        self.pending_search.take()
    }

    pub(crate) fn cancel_pending_search(&mut self) {
        self.pending_search = None;
        self.search_generation += 1;
    }

    pub(crate) fn apply_search(&mut self, text: String) {
        self.filters.search = text;
        self.cursor.current_page = 1;
        self.mark_dirty();
    }

    pub(crate) fn select_source(&mut self, value: &str) -> bool {
        let offered = value == ALL
            || value == self.filters.source
            || self.sources.iter().any(|source| source == value);
        if !offered {
            return false;
        }
        self.filters.source = value.to_string();
        self.cursor.current_page = 1;
        self.mark_dirty();
        true
    }

    pub(crate) fn select_status(&mut self, value: &str) -> bool {
        if value != ALL && !STATUS_VALUES.contains(&value) {
            return false;
        }
        self.filters.status = value.to_string();
        self.cursor.current_page = 1;
        self.mark_dirty();
        true
    }

    pub(crate) fn advance_page(&mut self) -> bool {
        if self.cursor.current_page >= self.cursor.total_pages {
            return false;
        }
        self.cursor.current_page += 1;
        self.mark_dirty();
        true
    }

    pub(crate) fn retreat_page(&mut self) -> bool {
        if self.cursor.current_page <= 1 {
            return false;
        }
        self.cursor.current_page -= 1;
        self.mark_dirty();
        true
    }

    /// Applies a jobs response if it answers the latest request. Returns
    /// whether it was applied.
    pub(crate) fn apply_jobs(
        &mut self,
        request_id: RequestId,
        result: Result<JobsPage, LoadError>,
    ) -> bool {
        if request_id != self.last_jobs_request {
            return false;
        }
        self.jobs_in_flight = false;
        match result {
            Ok(page) => {
                let total_pages = page.total_pages.max(1);
                self.cursor = PageCursor {
                    current_page: page.page.clamp(1, total_pages),
                    total_pages,
                };
                self.shown_page = self.cursor;
                self.jobs = page.jobs;
                self.total_jobs = Some(page.total);
            }
            Err(_) => {
                self.notification = Some(JOBS_LOAD_FAILED.to_string());
            }
        }
        self.mark_dirty();
        true
    }

    pub(crate) fn set_stats(&mut self, stats: Stats) {
        self.stats = Some(stats);
        self.mark_dirty();
    }

    pub(crate) fn set_sources(&mut self, sources: Vec<String>) {
        let mut unique: Vec<String> = Vec::with_capacity(sources.len());
        for source in sources {
            if source != ALL && !unique.contains(&source) {
                unique.push(source);
            }
        }
        self.sources = unique;
        self.mark_dirty();
    }

    fn source_chips(&self) -> Vec<ChipView> {
        let active = self.filters.source.as_str();
        let mut chips = vec![ChipView::new(ALL, "All", active == ALL)];
        chips.extend(
            self.sources
                .iter()
                .map(|source| ChipView::new(source, source, source == active)),
        );
        // Keep the active value visible when a vocabulary refresh dropped it.
        if !chips.iter().any(|chip| chip.active) {
            chips.push(ChipView::new(active, active, true));
        }
        chips
    }

    fn status_chips(&self) -> Vec<ChipView> {
        let active = self.filters.status.as_str();
        std::iter::once((ALL, "All"))
            .chain(STATUS_VALUES.iter().map(|status| (*status, status_label(status))))
            .map(|(value, label)| ChipView::new(value, label, value == active))
            .collect()
    }
}

fn status_label(status: &str) -> &'static str {
    match status {
        "pending" => "Pending",
        "applied" => "Applied",
        "failed" => "Failed",
        "rejected" => "Rejected",
        _ => "Other",
    }
}
