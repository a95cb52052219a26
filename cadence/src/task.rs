/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

//! Core task data structures for the cadence board.
//!
//! Two types model the two sides of the creation pipeline:
//!
//! ```text
//! slot selection ──► TaskDraft ──(Board::submit_draft)──► Task ──► scheduler
//!                     ↑ partial, unvalidated                ↑ validated, owns an id
//! ```
//!
//! # Ownership model
//! A `TaskDraft` is a plain value the caller owns and edits freely — there is
//! no shared form state.  Submission borrows the draft; on validation failure
//! the caller still holds it unchanged (the form is retained, not cleared).
//! A `Task` is owned by the [`Board`](crate::board::Board); the scheduler
//! works on value copies and never aliases board storage.

use std::fmt;

// ── Priority ──────────────────────────────────────────────────────────────────

/// Task priority level, ordered `Low < Medium < High`.
///
/// Carrying the typed enum through the whole pipeline (instead of a raw label
/// string) makes it impossible to hold an invalid priority inside the board.
/// Raw labels only exist at the plan-file boundary, where unknown values are
/// rejected at load time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Priority {
    Low,
    /// The draft-form default.
    #[default]
    Medium,
    High,
}

impl Priority {
    /// Comparison key used by the conflict resolver: `Low` = 1, `Medium` = 2,
    /// `High` = 3.  A higher rank wins an overlap.
    pub fn rank(self) -> u8 {
        match self {
            Priority::Low => 1,
            Priority::Medium => 2,
            Priority::High => 3,
        }
    }

    /// Parse from the lowercase label used in plan files.
    ///
    /// Returns `None` for unrecognised labels — the caller decides whether
    /// that is a hard error (plan loading) or ranks as zero
    /// ([`priority_rank`]).
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "low" => Some(Priority::Low),
            "medium" => Some(Priority::Medium),
            "high" => Some(Priority::High),
            _ => None,
        }
    }

    /// The lowercase wire/display label for this priority.
    pub fn label(self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
        }
    }
}

/// Rank a raw priority label without going through the typed enum.
///
/// Unrecognised labels rank `0` — the lowest possible precedence, which
/// always loses a comparison.
pub fn priority_rank(label: &str) -> u8 {
    Priority::from_label(label).map(Priority::rank).unwrap_or(0)
}

// ── TaskId ────────────────────────────────────────────────────────────────────

/// Opaque unique task identifier.
///
/// Assigned once at creation by an [`IdGenerator`](crate::board::IdGenerator)
/// and never reused.  The scheduler depends only on uniqueness, never on the
/// format.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TaskId(String);

impl TaskId {
    pub fn new(raw: impl Into<String>) -> Self {
        TaskId(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ── Task ──────────────────────────────────────────────────────────────────────

/// A titled, time-boxed, prioritised unit of work on the calendar.
///
/// Timestamps are milliseconds since the Unix epoch.  `end_ms > start_ms` is
/// enforced at creation ([`Board::submit_draft`](crate::board::Board::submit_draft));
/// the scheduler assumes it and only ever *translates* a task, never
/// stretches or shrinks it.
#[derive(Debug, Clone, PartialEq)]
pub struct Task {
    /// Stable identity, assigned at creation.
    pub id: TaskId,

    /// Non-empty display title.
    pub title: String,

    /// Start instant in ms since the epoch.
    pub start_ms: i64,

    /// End instant in ms since the epoch.  Always after `start_ms`.
    pub end_ms: i64,

    /// Decides which of two conflicting tasks yields.
    pub priority: Priority,
}

impl Task {
    /// Task duration in milliseconds.
    pub fn duration_ms(&self) -> i64 {
        self.end_ms - self.start_ms
    }

    /// Half-open interval overlap test.
    ///
    /// A task ending exactly when another starts is **not** a conflict.
    pub fn overlaps(&self, other: &Task) -> bool {
        self.start_ms < other.end_ms && other.start_ms < self.end_ms
    }
}

// ── TaskDraft ─────────────────────────────────────────────────────────────────

/// Partial task accumulated while the "add task" form is open.
///
/// Replaces shared mutable form state with an explicit value: created by
/// [`TaskDraft::for_slot`] when the user selects a time range, edited by the
/// caller, and validated by `Board::submit_draft`.
#[derive(Debug, Clone, Default)]
pub struct TaskDraft {
    /// User-supplied title; must be non-empty at submission.
    pub title: String,

    /// Selected start, if a slot has been chosen yet.
    pub start_ms: Option<i64>,

    /// Selected end, if a slot has been chosen yet.
    pub end_ms: Option<i64>,

    /// Defaults to [`Priority::Medium`].
    pub priority: Priority,
}

impl TaskDraft {
    /// Begin creation for a selected time slot.  Title starts empty and
    /// priority at the form default.
    pub fn for_slot(start_ms: i64, end_ms: i64) -> Self {
        TaskDraft {
            title: String::new(),
            start_ms: Some(start_ms),
            end_ms: Some(end_ms),
            priority: Priority::default(),
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    // ── Priority ──────────────────────────────────────────────────────────────

    #[test]
    fn priority_ranks_are_ordered() {
        assert!(Priority::Low.rank() < Priority::Medium.rank());
        assert!(Priority::Medium.rank() < Priority::High.rank());
    }

    #[test]
    fn priority_rank_matches_label_table() {
        assert_eq!(priority_rank("low"), 1);
        assert_eq!(priority_rank("medium"), 2);
        assert_eq!(priority_rank("high"), 3);
    }

    #[test]
    fn priority_rank_unknown_label_is_zero() {
        assert_eq!(priority_rank("urgent"), 0);
        assert_eq!(priority_rank(""), 0);
        assert_eq!(priority_rank("LOW"), 0); // labels are case-sensitive
    }

    #[test]
    fn priority_label_round_trips() {
        for p in [Priority::Low, Priority::Medium, Priority::High] {
            assert_eq!(Priority::from_label(p.label()), Some(p));
        }
    }

    #[test]
    fn priority_default_is_medium() {
        assert_eq!(Priority::default(), Priority::Medium);
    }

    // ── Task ──────────────────────────────────────────────────────────────────

    fn span(start_ms: i64, end_ms: i64) -> Task {
        Task {
            id: TaskId::new("t"),
            title: "t".to_string(),
            start_ms,
            end_ms,
            priority: Priority::Medium,
        }
    }

    #[test]
    fn duration_is_end_minus_start() {
        assert_eq!(span(1_000, 4_500).duration_ms(), 3_500);
    }

    #[test]
    fn overlapping_intervals_conflict() {
        let a = span(0, 100);
        let b = span(50, 150);
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
    }

    #[test]
    fn touching_intervals_do_not_conflict() {
        // half-open semantics: [0, 100) and [100, 200)
        let a = span(0, 100);
        let b = span(100, 200);
        assert!(!a.overlaps(&b));
        assert!(!b.overlaps(&a));
    }

    #[test]
    fn contained_interval_conflicts() {
        let outer = span(0, 1_000);
        let inner = span(200, 300);
        assert!(outer.overlaps(&inner));
        assert!(inner.overlaps(&outer));
    }

    // ── TaskDraft ─────────────────────────────────────────────────────────────

    #[test]
    fn draft_for_slot_has_form_defaults() {
        let draft = TaskDraft::for_slot(100, 200);
        assert!(draft.title.is_empty());
        assert_eq!(draft.start_ms, Some(100));
        assert_eq!(draft.end_ms, Some(200));
        assert_eq!(draft.priority, Priority::Medium);
    }
}
