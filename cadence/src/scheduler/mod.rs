/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

//! Conflict resolution for the cadence board.
//!
//! [`resolve_conflicts`] turns an arbitrary list of [`Task`]s into a schedule
//! with no *adjacent* overlaps, shifting lower-priority tasks out of the way
//! of higher-priority ones while preserving every task's duration.
//!
//! # Design decisions vs the original implementation
//!
//! | Topic | Original | Rust |
//! |---|---|---|
//! | Mutation | shifts fields on shared array elements | pure transform returning a new `Vec` |
//! | Winner emission | winner pushed twice (duplication bug) | winner inserted once, ahead of the shifted loser |
//! | Loser duration | recomputed after mutating `start` | captured before any mutation |
//! | Scope | adjacency-only, single pass | same — deliberately preserved |
//!
//! The single-pass greedy walk is a known limitation, not a defect: chains of
//! three or more mutually overlapping tasks may leave a residual overlap
//! against a non-adjacent task.  [`overlap::residual_conflicts`] surfaces
//! those as warnings; nothing re-scans to a fixed point.

pub mod overlap;

use tracing::debug;

use crate::task::Task;

/// Resolve temporal conflicts in `tasks`.
///
/// Returns a new list with identical membership and durations, ordered by
/// emission (final start time).  The input is never mutated; callers may keep
/// using it as the pre-resolution display order.
///
/// # Algorithm
/// 1. Stable-sort a working copy by start time (ties keep input order).
/// 2. Walk the sorted list comparing each task against the last placed one.
/// 3. On overlap the lower-ranked task is shifted to begin exactly when the
///    higher-ranked one ends; equal ranks yield to the earlier task.
///
/// Total over any structurally valid input — empty lists, single tasks,
/// identical starts and full mutual overlap all resolve without error.
pub fn resolve_conflicts(tasks: &[Task]) -> Vec<Task> {
    let mut pending: Vec<Task> = tasks.to_vec();
    if pending.len() < 2 {
        return pending;
    }

    // sort_by_key is stable: equal starts keep list order
    pending.sort_by_key(|t| t.start_ms);

    let mut placed: Vec<Task> = Vec::with_capacity(pending.len());

    for mut task in pending {
        if placed.is_empty() {
            placed.push(task);
            continue;
        }

        let last = placed.len() - 1;
        if task.start_ms >= placed[last].end_ms {
            // no conflict (half-open: an exact touch is fine)
            placed.push(task);
        } else if task.priority.rank() > placed[last].priority.rank() {
            // Incoming task wins: the previous occupant slides to start the
            // moment the winner ends, and the winner takes its slot.
            let duration = placed[last].duration_ms();
            placed[last].start_ms = task.end_ms;
            placed[last].end_ms = task.end_ms + duration;
            debug!(
                winner = %task.id,
                shifted = %placed[last].id,
                new_start_ms = placed[last].start_ms,
                "conflict: higher priority task takes the slot"
            );
            placed.insert(last, task);
        } else {
            // Incoming task yields (lower or equal priority): it slides to
            // start the moment the last placed task ends.
            let duration = task.duration_ms();
            task.start_ms = placed[last].end_ms;
            task.end_ms = task.start_ms + duration;
            debug!(
                shifted = %task.id,
                holder = %placed[last].id,
                new_start_ms = task.start_ms,
                "conflict: task yields to earlier or higher priority slot"
            );
            placed.push(task);
        }
        // The last element of `placed` is now whichever of the two tasks
        // occupies the later time slot — the next comparison target.
    }

    placed
}

// ── Tests ─────────────────────────────────────────────────────────────────────
