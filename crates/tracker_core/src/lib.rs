//! Job tracker core: pure filter/pagination state machine and view-model helpers.
mod effect;
mod format;
mod markup;
mod msg;
mod query;
mod state;
mod types;
mod update;
mod view_model;

pub use effect::Effect;
pub use format::{escape_html, format_relative_date, parse_timestamp, sanitize_terminal};
pub use markup::render_cards_html;
pub use msg::Msg;
pub use query::JobQuery;
pub use state::{
    AppState, FilterState, PageCursor, ALL, JOBS_LOAD_FAILED, SEARCH_DEBOUNCE, STATUS_VALUES,
};
pub use types::{JobId, JobRecord, JobStatus, JobsPage, LoadError, RequestId, Stats, PER_PAGE};
pub use update::update;
pub use view_model::{
    AppViewModel, Badge, ChipView, JobCardView, PaginationView, StatsView, NO_LOCATION,
};
