/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

//! Post-resolution overlap audit.
//!
//! # Status: warning only
//!
//! The resolver checks each task against the immediately preceding placed
//! task only, so chains of three or more mutually overlapping tasks can leave
//! a residual overlap against a non-adjacent task.  That behaviour is
//! deliberate (single-pass greedy, not a full interval solver); this module
//! **detects and reports** residual overlaps after a pass but never alters
//! the schedule.

use tracing::warn;

use crate::task::{Task, TaskId};

// ── Public API ────────────────────────────────────────────────────────────────

/// Find all pairs of tasks that still overlap in `tasks`.
///
/// Pairs are returned in start-time order, earlier task first.  An empty
/// result means the schedule is fully conflict-free.
pub fn residual_conflicts(tasks: &[Task]) -> Vec<(TaskId, TaskId)> {
    let mut sorted: Vec<&Task> = tasks.iter().collect();
    sorted.sort_by_key(|t| t.start_ms);

    let mut found = Vec::new();
    for (i, task) in sorted.iter().enumerate() {
        for later in &sorted[i + 1..] {
            if later.start_ms >= task.end_ms {
                // sorted by start: nothing further can reach back into `task`
                break;
            }
            if task.overlaps(later) {
                found.push((task.id.clone(), later.id.clone()));
            }
        }
    }
    found
}

/// Run [`residual_conflicts`] and emit a `warn!` per remaining pair.
///
/// Returns the number of overlapping pairs so callers can surface a summary.
pub fn warn_residual_conflicts(tasks: &[Task]) -> usize {
    let residual = residual_conflicts(tasks);
    for (first, second) in &residual {
        warn!(
            first = %first,
            second = %second,
            "residual overlap after resolution (chained conflicts are resolved greedily)"
        );
    }
    residual.len()
}

// ── Tests ─────────────────────────────────────────────────────────────────────
