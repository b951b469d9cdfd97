mod consts;
mod diagnostics;
mod errors;
mod gap;
mod lines;
mod merge;
mod normalize;
mod task;
mod validate;
mod writer;

pub use consts::{BEGIN_EDITABLE_MARKER, END_EDITABLE_MARKER, METADATA_FILE_NAME};
pub use diagnostics::{
    Diagnostics, LogDiagnostics, NullDiagnostics, RecordingDiagnostics, Severity,
};
pub use errors::TaskPayloadError;
pub use gap::{Gap, GapScan, locate_gap};
pub use lines::split_lines;
pub use merge::{ResetMode, extract_submittable, reset_file};
pub use normalize::normalize_lines;
pub use task::{CourseData, CoursePartData, TaskData, TaskFile};
pub use validate::validate_scaffold;
pub use writer::{WriteOutcome, write_task_file};
