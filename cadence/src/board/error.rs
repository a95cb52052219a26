/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

//! Structured error types for the cadence board.
//!
//! Two error enums model the two failure layers:
//!
//! * [`DraftError`] — why a submitted draft was rejected before it ever
//!   reached the scheduler (the create operation is a no-op and the caller
//!   keeps the draft).
//! * [`BoardError`] — why a list operation on existing tasks failed.
//!
//! Every variant carries the exact values involved so the caller can log or
//! display them without further parsing.

use thiserror::Error;

// ── Draft validation ──────────────────────────────────────────────────────────

/// Reason a [`TaskDraft`](crate::task::TaskDraft) failed validation.
///
/// Returned by [`Board::submit_draft`](super::Board::submit_draft).  The
/// draft itself is untouched on failure — the form is retained, not cleared.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DraftError {
    /// The title is empty.
    #[error("task title must not be empty")]
    EmptyTitle,

    /// No time slot has been selected (`start_ms` or `end_ms` is `None`).
    #[error("no time range selected — pick a slot before submitting")]
    MissingTimeRange,

    /// The selected range has zero or negative duration.
    #[error("task must end after it starts (start {start_ms}ms, end {end_ms}ms)")]
    InvalidTimeRange { start_ms: i64, end_ms: i64 },
}

// ── List operations ───────────────────────────────────────────────────────────

/// Failure of a list operation on the board.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    /// A reorder index is outside the current list.
    #[error("task index {index} is out of range for a list of {len}")]
    IndexOutOfRange { index: usize, len: usize },
}
