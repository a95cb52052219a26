/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

//! Task identifier generation.
//!
//! The generator is injected into the [`Board`](super::Board) so creation is
//! deterministic under test.  The scheduler never depends on the identifier
//! format, only on uniqueness.

use uuid::Uuid;

use crate::task::TaskId;

/// Source of fresh, never-reused task identifiers.
pub trait IdGenerator {
    fn next_id(&mut self) -> TaskId;
}

/// Production generator: random UUID v4 per task.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidIds;

impl IdGenerator for UuidIds {
    fn next_id(&mut self) -> TaskId {
        TaskId::new(Uuid::new_v4().to_string())
    }
}

/// Deterministic counter-based generator for tests and plan loading.
#[derive(Debug, Clone, Default)]
pub struct SequentialIds {
    issued: u64,
}

impl IdGenerator for SequentialIds {
    fn next_id(&mut self) -> TaskId {
        self.issued += 1;
        TaskId::new(format!("task-{:04}", self.issued))
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn sequential_ids_are_stable_and_ordered() {
        let mut ids = SequentialIds::default();
        assert_eq!(ids.next_id().as_str(), "task-0001");
        assert_eq!(ids.next_id().as_str(), "task-0002");
        assert_eq!(ids.next_id().as_str(), "task-0003");
    }

    #[test]
    fn uuid_ids_are_unique() {
        let mut ids = UuidIds;
        let mut seen = HashSet::new();
        for _ in 0..1_000 {
            assert!(seen.insert(ids.next_id()), "uuid generator repeated an id");
        }
    }
}
