use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::diagnostics::Diagnostics;
use crate::errors::TaskPayloadError;
use crate::merge::extract_submittable;

fn default_source() -> String {
    "editor".to_owned()
}

/// One code file of a programming exercise, as cached in the task metadata.
///
/// `content` is the canonical template fetched from the server and is the
/// ground truth for everything outside the editable region.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskFile {
    /// Extended task id the grader keys on, e.g. `60.hello.Xelt2CQGvUwL`.
    pub task_id_ext: String,

    pub content: String,

    pub file_name: String,

    /// Source attribute in TIM; `editor` for files edited in the browser.
    #[serde(default = "default_source")]
    pub source: String,

    #[serde(default)]
    pub task_directory: Option<String>,

    #[serde(default)]
    pub task_type: Option<String>,

    /// Stdin passed to the program when the grader runs it.
    #[serde(default)]
    pub user_input: String,

    /// Command line arguments passed to the program by the grader.
    #[serde(default)]
    pub user_args: String,
}

impl TaskFile {
    /// Parse a single task file payload.
    ///
    /// # Errors
    ///
    /// Returns [`TaskPayloadError`] when the JSON is malformed or a required
    /// field is missing or blank.
    pub fn from_json(payload: &str) -> Result<Self, TaskPayloadError> {
        let file: Self = serde_json::from_str(payload)?;
        file.check()?;
        Ok(file)
    }

    /// A copy of this file whose `content` is what the server should grade:
    /// the user's editable region for templated exercises, the whole answer
    /// for plain ones.
    #[must_use]
    pub fn with_submitted_content(&self, answer: &str, diagnostics: &dyn Diagnostics) -> Self {
        Self {
            content: extract_submittable(answer, &self.content, diagnostics),
            ..self.clone()
        }
    }

    fn check(&self) -> Result<(), TaskPayloadError> {
        if self.task_id_ext.trim().is_empty() {
            return Err(TaskPayloadError::MissingField("task_id_ext"));
        }
        if self.file_name.trim().is_empty() {
            return Err(TaskPayloadError::MissingField("file_name"));
        }

        Ok(())
    }
}

/// One programming exercise and the files it materialises on disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskData {
    /// TIM document path of the course part the task belongs to.
    pub path: String,

    /// Grader type string, e.g. `cc/input/comtest`.
    #[serde(rename = "type")]
    pub task_type: String,

    pub doc_id: i64,

    /// Task id used when fetching the exercise for an IDE.
    pub ide_task_id: String,

    pub task_files: Vec<TaskFile>,

    #[serde(default)]
    pub task_directory: Option<String>,

    /// Short instructions shown with the task.
    #[serde(default)]
    pub stem: Option<String>,

    #[serde(default)]
    pub header: Option<String>,
}

impl TaskData {
    /// Parse a task payload, validating every contained file.
    ///
    /// # Errors
    ///
    /// Returns [`TaskPayloadError`] when the JSON is malformed or a required
    /// field is missing or blank.
    pub fn from_json(payload: &str) -> Result<Self, TaskPayloadError> {
        let task: Self = serde_json::from_str(payload)?;
        task.check()?;
        Ok(task)
    }

    /// The directory the task's files are materialised into, relative to the
    /// course root: the explicit `task_directory` when present, otherwise
    /// the last segment of the document path joined with the task id.
    #[must_use]
    pub fn task_directory(&self) -> PathBuf {
        if let Some(directory) = &self.task_directory {
            return PathBuf::from(directory);
        }

        match Path::new(&self.path).file_name() {
            Some(course_part) => Path::new(course_part).join(&self.ide_task_id),
            None => PathBuf::from(&self.ide_task_id),
        }
    }

    /// The run type, e.g. `cc` from `cc/input/comtest`.
    #[must_use]
    pub fn run_type(&self) -> &str {
        self.task_type
            .split(['/', ',', ';', ' '])
            .next()
            .unwrap_or_default()
    }

    /// The task file with the given name, the reset workflow's query.
    #[must_use]
    pub fn find_task_file(&self, file_name: &str) -> Option<&TaskFile> {
        self.task_files
            .iter()
            .find(|file| file.file_name == file_name)
    }

    fn check(&self) -> Result<(), TaskPayloadError> {
        if self.ide_task_id.trim().is_empty() {
            return Err(TaskPayloadError::MissingField("ide_task_id"));
        }

        for file in &self.task_files {
            file.check()?;
        }

        Ok(())
    }
}

/// One course part of the locally cached metadata document.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CoursePartData {
    /// Tasks keyed by their ide task id.
    #[serde(default)]
    pub tasks: BTreeMap<String, TaskData>,
}

/// The locally cached metadata document (`.timdata`) describing every task
/// materialised under a course directory.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CourseData {
    /// Course parts keyed by their document path.
    #[serde(default)]
    pub course_parts: BTreeMap<String, CoursePartData>,
}

impl CourseData {
    /// Parse a cached metadata document, validating every contained task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskPayloadError`] when the JSON is malformed or a required
    /// field is missing or blank.
    pub fn from_json(payload: &str) -> Result<Self, TaskPayloadError> {
        let course: Self = serde_json::from_str(payload)?;

        for part in course.course_parts.values() {
            for task in part.tasks.values() {
                task.check()?;
            }
        }

        Ok(course)
    }

    /// The first task file with the given name across every course part.
    #[must_use]
    pub fn find_task_file(&self, file_name: &str) -> Option<&TaskFile> {
        self.course_parts
            .values()
            .flat_map(|part| part.tasks.values())
            .find_map(|task| task.find_task_file(file_name))
    }
}
