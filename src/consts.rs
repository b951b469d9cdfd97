/// Substring a line must contain to open the editable region of a task file.
pub const BEGIN_EDITABLE_MARKER: &str = "Write your code below this line";

/// Substring a line must contain to close the editable region of a task file.
pub const END_EDITABLE_MARKER: &str = "Write your code above this line";

/// Name of the metadata document cached next to materialised task files.
pub const METADATA_FILE_NAME: &str = ".timdata";
