use crate::{JobId, JobsPage, LoadError, RequestId, Stats};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// App finished starting; load everything.
    Started,
    /// User edited the search box (not yet debounced).
    SearchInput(String),
    /// A debounce timer fired.
    SearchDebounceElapsed { generation: u64 },
    /// User cleared the search box.
    SearchCleared,
    /// User picked a source chip.
    SourceChipSelected(String),
    /// User picked a status chip.
    StatusChipSelected(String),
    NextPageClicked,
    PrevPageClicked,
    /// User asked for a manual refresh.
    RefreshClicked,
    /// Periodic refresh timer fired.
    AutoRefreshTick,
    /// User clicked "Apply" on a card.
    ApplyClicked { job_id: JobId },
    /// Backend answered a jobs-list fetch.
    JobsLoaded {
        request_id: RequestId,
        result: Result<JobsPage, LoadError>,
    },
    /// Backend answered a stats fetch.
    StatsLoaded(Result<Stats, LoadError>),
    /// Backend answered a sources fetch.
    SourcesLoaded(Result<Vec<String>, LoadError>),
    /// Backend answered a status update.
    JobStatusUpdated {
        job_id: JobId,
        result: Result<(), LoadError>,
    },
}
