//! Plan file loading.
//!
//! A plan file is the batch counterpart of the add-task dialog: a YAML list
//! of task entries the CLI feeds to the board one by one.
//!
//! The expected YAML structure is:
//! ```yaml
//! tasks:
//!   - title: "Standup"
//!     start: 2026-08-27T09:00:00Z
//!     end: 2026-08-27T09:30:00Z
//!     priority: medium
//! ```
//!
//! Timestamps are RFC 3339 and converted to epoch milliseconds on load;
//! `priority` is optional and defaults to `medium`.  Unknown priority labels
//! fail the load — rejection happens at the creation boundary, never inside
//! the scheduler.

use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use tracing::{debug, info};

use crate::task::{Priority, TaskDraft};

// ── Private YAML deserialization types ────────────────────────────────────────

/// Top-level wrapper that maps directly onto the YAML file layout.
///
/// Kept private — callers work with [`TaskDraft`] values instead.
#[derive(Debug, Deserialize)]
struct PlanFile {
    #[serde(default)]
    tasks: Vec<PlanEntry>,
}

/// Per-task fields as they appear in the YAML file.
#[derive(Debug, Deserialize)]
struct PlanEntry {
    title: String,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
    /// Raw label; parsed through [`Priority::from_label`] so unknown values
    /// are a load error rather than a silently lowest-ranked task.
    #[serde(default = "default_priority_label")]
    priority: String,
}

fn default_priority_label() -> String {
    Priority::default().label().to_string()
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Parse `path` into a list of drafts ready for `Board::submit_draft`.
///
/// Entry order is preserved — it becomes the board's initial list order.
/// Time-range validation (`end > start`, non-empty title) is left to draft
/// submission so interactive and batch creation share one rule set.
///
/// # Errors
/// Returns an error if the file cannot be opened, the YAML is structurally
/// invalid, or an entry carries an unknown priority label.  The error context
/// names the offending file and entry.
pub fn load_drafts(path: &Path) -> Result<Vec<TaskDraft>> {
    info!("Loading plan from: {}", path.display());

    let content = std::fs::read_to_string(path)
        .with_context(|| format!("cannot open plan file: {}", path.display()))?;

    let file: PlanFile = serde_yaml::from_str(&content)
        .with_context(|| format!("failed to parse YAML plan: {}", path.display()))?;

    let mut drafts = Vec::with_capacity(file.tasks.len());
    for (index, entry) in file.tasks.into_iter().enumerate() {
        let priority = Priority::from_label(&entry.priority).with_context(|| {
            format!(
                "plan entry {} ('{}'): unknown priority '{}' (valid: low, medium, high)",
                index + 1,
                entry.title,
                entry.priority,
            )
        })?;

        debug!(
            entry = index + 1,
            title = %entry.title,
            start = %entry.start,
            end = %entry.end,
            priority = priority.label(),
            "plan entry parsed"
        );

        drafts.push(TaskDraft {
            title: entry.title,
            start_ms: Some(entry.start.timestamp_millis()),
            end_ms: Some(entry.end.timestamp_millis()),
            priority,
        });
    }

    info!("Loaded {} plan entry(ies)", drafts.len());
    Ok(drafts)
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    /// Helper: write a YAML string to a temp file and return it.
    fn yaml_tempfile(content: &str) -> NamedTempFile {
        let mut f = NamedTempFile::new().unwrap();
        f.write_all(content.as_bytes()).unwrap();
        f
    }

    #[test]
    fn load_example_plan() {
        let yaml = r#"
tasks:
  - title: "Standup"
    start: 2026-08-27T09:00:00Z
    end: 2026-08-27T09:30:00Z
    priority: high
  - title: "Deep work"
    start: 2026-08-27T09:15:00Z
    end: 2026-08-27T11:00:00Z
    priority: medium
"#;
        let f = yaml_tempfile(yaml);
        let drafts = load_drafts(f.path()).unwrap();

        assert_eq!(drafts.len(), 2);
        assert_eq!(drafts[0].title, "Standup");
        assert_eq!(drafts[0].priority, Priority::High);
        assert_eq!(drafts[1].title, "Deep work");
        assert_eq!(drafts[1].priority, Priority::Medium);

        // 2026-08-27T09:00:00Z and 09:30:00Z are half an hour apart
        let start = drafts[0].start_ms.unwrap();
        let end = drafts[0].end_ms.unwrap();
        assert_eq!(end - start, 30 * 60_000);
    }

    #[test]
    fn rfc3339_converts_to_epoch_millis() {
        let yaml = r#"
tasks:
  - title: "Epoch"
    start: 1970-01-01T00:00:00Z
    end: 1970-01-01T01:00:00Z
"#;
        let f = yaml_tempfile(yaml);
        let drafts = load_drafts(f.path()).unwrap();
        assert_eq!(drafts[0].start_ms, Some(0));
        assert_eq!(drafts[0].end_ms, Some(3_600_000));
    }

    #[test]
    fn priority_defaults_to_medium_when_absent() {
        let yaml = r#"
tasks:
  - title: "No priority"
    start: 2026-08-27T09:00:00Z
    end: 2026-08-27T10:00:00Z
"#;
        let f = yaml_tempfile(yaml);
        let drafts = load_drafts(f.path()).unwrap();
        assert_eq!(drafts[0].priority, Priority::Medium);
    }

    #[test]
    fn unknown_priority_label_fails_the_load() {
        let yaml = r#"
tasks:
  - title: "Bad"
    start: 2026-08-27T09:00:00Z
    end: 2026-08-27T10:00:00Z
    priority: urgent
"#;
        let f = yaml_tempfile(yaml);
        let err = load_drafts(f.path()).unwrap_err();
        assert!(err.to_string().contains("unknown priority 'urgent'"));
    }

    #[test]
    fn empty_tasks_section_loads_nothing() {
        let f = yaml_tempfile("tasks: []\n");
        assert!(load_drafts(f.path()).unwrap().is_empty());
    }

    #[test]
    fn missing_tasks_key_loads_nothing() {
        let f = yaml_tempfile("{}\n");
        assert!(load_drafts(f.path()).unwrap().is_empty());
    }

    #[test]
    fn missing_file_returns_error() {
        let err = load_drafts(Path::new("/nonexistent/plan.yaml")).unwrap_err();
        assert!(err.to_string().contains("cannot open plan file"));
    }

    #[test]
    fn malformed_yaml_returns_error() {
        let f = yaml_tempfile("this is: not: valid: yaml: content:::");
        assert!(load_drafts(f.path()).is_err());
    }
}
