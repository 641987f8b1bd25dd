pub mod autosave;
pub mod drafts;
pub mod filter;
pub mod service_logs;
pub mod validation;

pub use autosave::{AutosaveController, AUTOSAVE_DELAY};
pub use drafts::DraftStore;
pub use filter::{filter_logs, FilteredLogs, LogFilter};
pub use service_logs::ServiceLogStore;
pub use validation::{validate, FieldErrors, ValidationError};
