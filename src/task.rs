use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

static DATE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d{4})[-/.](\d{1,2})[-/.](\d{1,2})$").unwrap());

/// A scheduled piece of work, spanning `start` to `end` inclusive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub name: String,
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl Task {
    pub fn new(
        name: impl Into<String>,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Self, TaskError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(TaskError::EmptyName);
        }
        if start > end {
            return Err(TaskError::ReversedRange { name, start, end });
        }
        Ok(Self { name, start, end })
    }
}

#[derive(Debug, Error)]
pub enum TaskError {
    #[error("task name is empty")]
    EmptyName,

    #[error("unparseable task date {value:?}")]
    BadDate { value: String },

    #[error("task {name:?}: start {start} is after end {end}")]
    ReversedRange {
        name: String,
        start: NaiveDate,
        end: NaiveDate,
    },

    #[error("task #{index}: {source}")]
    AtIndex {
        index: usize,
        #[source]
        source: Box<TaskError>,
    },

    #[error("task list is not valid JSON: {message}")]
    Syntax { message: String },
}

#[derive(Debug, Deserialize)]
struct RawTask {
    name: String,
    start: String,
    end: String,
}

/// Parses a calendar date written as `YYYY-MM-DD`; `/` and `.` separators
/// are accepted as well.
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    let caps = DATE_RE.captures(value.trim())?;
    let year: i32 = caps[1].parse().ok()?;
    let month: u32 = caps[2].parse().ok()?;
    let day: u32 = caps[3].parse().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}

fn resolve_task(raw: RawTask) -> Result<Task, TaskError> {
    let start = parse_date(&raw.start).ok_or_else(|| TaskError::BadDate {
        value: raw.start.clone(),
    })?;
    let end = parse_date(&raw.end).ok_or_else(|| TaskError::BadDate {
        value: raw.end.clone(),
    })?;
    Task::new(raw.name, start, end)
}

/// Parses a JSON array of `{name, start, end}` objects into validated tasks.
/// Strict JSON is tried first; JSON5 is accepted as a fallback for relaxed
/// hand-written files.
pub fn parse_tasks(input: &str) -> Result<Vec<Task>, TaskError> {
    let raw: Vec<RawTask> = match serde_json::from_str(input) {
        Ok(parsed) => parsed,
        Err(json_err) => json5::from_str(input).map_err(|_| TaskError::Syntax {
            message: json_err.to_string(),
        })?,
    };

    let mut tasks = Vec::with_capacity(raw.len());
    for (index, raw_task) in raw.into_iter().enumerate() {
        let task = resolve_task(raw_task).map_err(|source| TaskError::AtIndex {
            index,
            source: Box::new(source),
        })?;
        tasks.push(task);
    }
    Ok(tasks)
}

pub fn load_tasks(path: &Path) -> anyhow::Result<Vec<Task>> {
    let contents = std::fs::read_to_string(path)?;
    Ok(parse_tasks(&contents)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(value: &str) -> NaiveDate {
        parse_date(value).expect("test date")
    }

    #[test]
    fn parse_date_accepts_all_separators() {
        assert_eq!(parse_date("2026-03-05"), parse_date("2026/03/05"));
        assert_eq!(parse_date("2026-03-05"), parse_date("2026.3.5"));
        assert_eq!(parse_date("2026-03-05").unwrap().to_string(), "2026-03-05");
    }

    #[test]
    fn parse_date_rejects_garbage() {
        assert!(parse_date("not a date").is_none());
        assert!(parse_date("2026-13-01").is_none());
        assert!(parse_date("2026-02-30").is_none());
        assert!(parse_date("26-02-01").is_none());
        assert!(parse_date("").is_none());
    }

    #[test]
    fn new_rejects_empty_name() {
        let err = Task::new("   ", date("2026-01-01"), date("2026-01-02")).unwrap_err();
        assert!(matches!(err, TaskError::EmptyName));
    }

    #[test]
    fn new_rejects_reversed_range() {
        let err = Task::new("Ship it", date("2026-02-01"), date("2026-01-01")).unwrap_err();
        assert!(matches!(err, TaskError::ReversedRange { .. }));
    }

    #[test]
    fn single_day_task_is_valid() {
        let task = Task::new("Kickoff", date("2026-01-05"), date("2026-01-05")).unwrap();
        assert_eq!(task.start, task.end);
    }

    #[test]
    fn parse_tasks_reads_strict_json() {
        let tasks = parse_tasks(
            r#"[
                {"name": "Design", "start": "2026-01-05", "end": "2026-01-16"},
                {"name": "Build", "start": "2026-01-19", "end": "2026-03-06"}
            ]"#,
        )
        .unwrap();
        assert_eq!(tasks.len(), 2);
        assert_eq!(tasks[0].name, "Design");
        assert_eq!(tasks[1].end, date("2026-03-06"));
    }

    #[test]
    fn parse_tasks_falls_back_to_json5() {
        let tasks = parse_tasks(
            r#"[
                // launch window
                {name: "Launch", start: "2026-06-01", end: "2026-06-03",},
            ]"#,
        )
        .unwrap();
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].name, "Launch");
    }

    #[test]
    fn parse_tasks_reports_the_failing_index() {
        let err = parse_tasks(
            r#"[
                {"name": "Fine", "start": "2026-01-01", "end": "2026-01-02"},
                {"name": "Broken", "start": "2026-99-01", "end": "2026-01-02"}
            ]"#,
        )
        .unwrap_err();
        match err {
            TaskError::AtIndex { index, source } => {
                assert_eq!(index, 1);
                assert!(matches!(*source, TaskError::BadDate { .. }));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn parse_tasks_rejects_non_json() {
        let err = parse_tasks("tasks: Design, Build").unwrap_err();
        assert!(matches!(err, TaskError::Syntax { .. }));
    }
}
