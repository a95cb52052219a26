/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

//! The cadence board: the ordered task list and its mutation surface.
//!
//! [`Board`] is the creation/reorder collaborator in front of the scheduler.
//! Every mutation — submitting a draft, moving a task to a new list position
//! — is followed by a full [`resolve_conflicts`] pass over the entire list
//! before the caller sees the result.  There is no incremental mode.
//!
//! The UI layers this replaces (calendar grid, drag-and-drop gestures, the
//! add-task dialog) are reduced to their outcomes: a validated [`TaskDraft`]
//! and a "move item at index `from` to index `to`" request.

pub mod error;
pub mod ident;

pub use error::{BoardError, DraftError};
pub use ident::{IdGenerator, SequentialIds, UuidIds};

use tracing::{debug, info};

use crate::scheduler::{overlap, resolve_conflicts};
use crate::task::{Task, TaskDraft, TaskId};

// ── Board ─────────────────────────────────────────────────────────────────────

/// Ordered, conflict-resolved task list with an injected identifier source.
///
/// The list the board exposes is always the output of the latest resolution
/// pass; its order is the scheduler's emission order (final start time), not
/// necessarily the order tasks were created in.
pub struct Board<G: IdGenerator> {
    tasks: Vec<Task>,
    ids: G,
}

impl Board<UuidIds> {
    /// Create an empty board with random UUID identifiers.
    pub fn new() -> Self {
        Board::with_ids(UuidIds)
    }
}

impl Default for Board<UuidIds> {
    fn default() -> Self {
        Board::new()
    }
}

impl<G: IdGenerator> Board<G> {
    /// Create an empty board with a caller-chosen identifier generator.
    pub fn with_ids(ids: G) -> Self {
        Board {
            tasks: Vec::new(),
            ids,
        }
    }

    // ── Creation ──────────────────────────────────────────────────────────────

    /// Validate `draft`, assign it a fresh id, append it and run a resolution
    /// pass.
    ///
    /// On failure the board is unchanged and the caller still holds the draft
    /// — the create operation is a no-op and the form is retained.
    ///
    /// # Errors
    /// [`DraftError`] naming exactly which field failed validation.
    pub fn submit_draft(&mut self, draft: &TaskDraft) -> Result<TaskId, DraftError> {
        if draft.title.is_empty() {
            return Err(DraftError::EmptyTitle);
        }
        let (Some(start_ms), Some(end_ms)) = (draft.start_ms, draft.end_ms) else {
            return Err(DraftError::MissingTimeRange);
        };
        if end_ms <= start_ms {
            return Err(DraftError::InvalidTimeRange { start_ms, end_ms });
        }

        let id = self.ids.next_id();
        self.tasks.push(Task {
            id: id.clone(),
            title: draft.title.clone(),
            start_ms,
            end_ms,
            priority: draft.priority,
        });
        self.resolve();

        info!(
            task = %id,
            priority = draft.priority.label(),
            total = self.tasks.len(),
            "task created"
        );
        Ok(id)
    }

    // ── Reorder ───────────────────────────────────────────────────────────────

    /// Move the task at list position `from` to position `to` (splice
    /// semantics: remove, then insert at the destination index), then run a
    /// resolution pass.
    ///
    /// The board is indifferent to *why* the order changed — a drag gesture
    /// reduces to exactly this call.
    ///
    /// # Errors
    /// [`BoardError::IndexOutOfRange`] if either index is past the end; the
    /// list is unchanged.
    pub fn move_task(&mut self, from: usize, to: usize) -> Result<(), BoardError> {
        let len = self.tasks.len();
        for index in [from, to] {
            if index >= len {
                return Err(BoardError::IndexOutOfRange { index, len });
            }
        }

        let task = self.tasks.remove(from);
        debug!(task = %task.id, from, to, "task reordered");
        self.tasks.insert(to, task);
        self.resolve();
        Ok(())
    }

    // ── Views ─────────────────────────────────────────────────────────────────

    /// Current task list in emission order.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    // ── Internal ──────────────────────────────────────────────────────────────

    /// Full resolution pass over the entire list, plus the residual-overlap
    /// audit (warning only).
    fn resolve(&mut self) {
        self.tasks = resolve_conflicts(&self.tasks);
        overlap::warn_residual_conflicts(&self.tasks);
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
