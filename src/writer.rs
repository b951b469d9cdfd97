use std::{fs, io, path::Path};

/// Outcome of a single non-destructive file write.
///
/// "File already exists" is an ordinary state here, not an error; the CLI
/// layer decides how to message each case.
#[derive(Debug)]
pub enum WriteOutcome {
    /// The file was created, or replaced because `overwrite` was requested.
    Written,
    /// The file already exists and `overwrite` was not requested.
    Skipped,
    /// The filesystem refused the write.
    Failed(io::Error),
}

impl WriteOutcome {
    #[must_use]
    pub const fn is_written(&self) -> bool {
        matches!(self, Self::Written)
    }
}

/// Write `content` to `path`, creating parent directories as needed.
///
/// An existing file is left untouched unless `overwrite` is set.
#[must_use]
pub fn write_task_file(path: &Path, content: &str, overwrite: bool) -> WriteOutcome {
    if path.exists() && !overwrite {
        return WriteOutcome::Skipped;
    }

    if let Some(parent) = path.parent()
        && let Err(error) = fs::create_dir_all(parent)
    {
        return WriteOutcome::Failed(error);
    }

    match fs::write(path, content) {
        Ok(()) => WriteOutcome::Written,
        Err(error) => WriteOutcome::Failed(error),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_writes_new_file_and_creates_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Demo1/t1/main.py");

        let outcome = write_task_file(&path, "print('hi')", false);

        assert!(outcome.is_written());
        assert_eq!(fs::read_to_string(&path).unwrap(), "print('hi')");
    }

    #[test]
    fn test_existing_file_is_skipped_without_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("main.py");
        fs::write(&path, "original").unwrap();

        let outcome = write_task_file(&path, "replacement", false);

        assert!(matches!(outcome, WriteOutcome::Skipped));
        assert_eq!(fs::read_to_string(&path).unwrap(), "original");
    }

    #[test]
    fn test_existing_file_is_replaced_with_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("main.py");
        fs::write(&path, "original").unwrap();

        let outcome = write_task_file(&path, "replacement", true);

        assert!(outcome.is_written());
        assert_eq!(fs::read_to_string(&path).unwrap(), "replacement");
    }

    #[test]
    fn test_unwritable_path_reports_failure() {
        let dir = tempfile::tempdir().unwrap();
        // The target's parent is a file, so the write cannot succeed.
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, "").unwrap();

        let outcome = write_task_file(&blocker.join("main.py"), "x", false);

        assert!(matches!(outcome, WriteOutcome::Failed(_)));
    }
}
