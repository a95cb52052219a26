/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

//! cadence – priority-driven calendar board
//!
//! Module layout:
//!
//! ```text
//! lib.rs
//! ├── task.rs     – Task, TaskDraft, Priority, TaskId
//! ├── scheduler/  – conflict resolution + residual-overlap audit
//! ├── board/      – ordered task list: create, reorder, resolve
//! └── plan/       – YAML plan-file loading for the CLI
//! ```

pub mod board;
pub mod plan;
pub mod scheduler;
pub mod task;
