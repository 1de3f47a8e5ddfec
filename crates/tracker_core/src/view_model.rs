use chrono::NaiveDateTime;

use crate::format::format_relative_date;
use crate::{JobId, JobRecord, PageCursor, Stats};

/// Shown in place of a missing job location.
pub const NO_LOCATION: &str = "Not specified";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub stats: Option<StatsView>,
    pub search: String,
    pub source_chips: Vec<ChipView>,
    pub status_chips: Vec<ChipView>,
    pub cards: Vec<JobCardView>,
    pub show_empty_state: bool,
    pub jobs_count_label: String,
    pub pagination: Option<PaginationView>,
    pub loading: bool,
    pub dirty: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StatsView {
    pub total: u64,
    pub applied: u64,
    pub pending: u64,
    pub failed: u64,
}

impl From<Stats> for StatsView {
    fn from(stats: Stats) -> Self {
        Self {
            total: stats.total,
            applied: stats.applied,
            pending: stats.pending,
            failed: stats.failed,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChipView {
    pub value: String,
    pub label: String,
    pub active: bool,
}

impl ChipView {
    pub(crate) fn new(value: &str, label: &str, active: bool) -> Self {
        Self {
            value: value.to_string(),
            label: label.to_string(),
            active,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Badge {
    New,
    Old,
}

impl Badge {
    pub fn label(self) -> &'static str {
        match self {
            Badge::New => "✨ NEW",
            Badge::Old => "OLD",
        }
    }
}

/// Raw display text for one card; surfaces escape it for their own medium.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobCardView {
    pub job_id: JobId,
    pub badge: Badge,
    pub title: String,
    pub company: String,
    pub location: String,
    pub source: String,
    pub url: String,
    pub posted: String,
    pub added: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationView {
    pub page: u32,
    pub total_pages: u32,
    pub prev_enabled: bool,
    pub next_enabled: bool,
    pub label: String,
}

pub(crate) fn build_cards(jobs: &[JobRecord], now: NaiveDateTime) -> Vec<JobCardView> {
    jobs.iter()
        .map(|job| JobCardView {
            job_id: job.id,
            badge: if job.is_new { Badge::New } else { Badge::Old },
            title: job.title.clone(),
            company: job.company.clone(),
            location: job
                .location
                .as_deref()
                .filter(|location| !location.is_empty())
                .unwrap_or(NO_LOCATION)
                .to_string(),
            source: job.source_category.clone(),
            url: job.url.clone(),
            posted: format_relative_date(job.posted_date.as_deref(), now),
            added: format_relative_date(job.scraped_date.as_deref(), now),
        })
        .collect()
}

/// `None` hides the pagination controls.
pub(crate) fn build_pagination(cursor: PageCursor) -> Option<PaginationView> {
    if cursor.total_pages <= 1 {
        return None;
    }
    Some(PaginationView {
        page: cursor.current_page,
        total_pages: cursor.total_pages,
        prev_enabled: cursor.current_page != 1,
        next_enabled: cursor.current_page != cursor.total_pages,
        label: format!("Page {} of {}", cursor.current_page, cursor.total_pages),
    })
}

pub(crate) fn jobs_count_label(total: u64) -> String {
    if total == 1 {
        "1 job".to_string()
    } else {
        format!("{total} jobs")
    }
}
