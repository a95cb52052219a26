/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

use std::path::PathBuf;
use std::process;

use chrono::{DateTime, Utc};
use clap::Parser;
use tracing::{error, info, warn};

use cadence::board::Board;
use cadence::plan;
use cadence::scheduler::overlap;

// ── CLI argument definition ───────────────────────────────────────────────────

/// cadence – priority-driven calendar board.
///
/// Example:
///   cadence --plan demos/plan.yaml --list
#[derive(Debug, Parser)]
#[command(
    name = "cadence",
    about = "Priority-driven calendar board with automatic conflict resolution",
    long_about = None,
)]
struct Cli {
    /// Path to the YAML plan file.
    #[arg(short = 'p', long = "plan")]
    plan: Option<PathBuf>,

    /// Also print the board list (titles only, list order).
    #[arg(short = 'l', long = "list", default_value_t = false)]
    list: bool,
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() {
    // Initialise structured logging.
    // Level is controlled by the RUST_LOG env-var (e.g. RUST_LOG=debug).
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("cadence starting up...");

    let cli = Cli::parse();
    let mut board = Board::new();

    // ── Load the plan ─────────────────────────────────────────────────────────
    match &cli.plan {
        Some(path) => {
            let drafts = match plan::load_drafts(path) {
                Ok(drafts) => drafts,
                Err(e) => {
                    error!("Failed to load plan: {:#}", e);
                    process::exit(1);
                }
            };
            for (index, draft) in drafts.iter().enumerate() {
                if let Err(e) = board.submit_draft(draft) {
                    error!(
                        "Plan entry {} ('{}') rejected: {}",
                        index + 1,
                        draft.title,
                        e
                    );
                    process::exit(1);
                }
            }
        }
        None => {
            warn!("No plan file provided — nothing to schedule");
        }
    }

    // ── Print the resolved schedule ───────────────────────────────────────────
    info!("Resolved schedule ({} task(s)):", board.len());
    for task in board.tasks() {
        info!(
            "  {start} – {end}  [{priority:>6}]  {title}",
            start = fmt_instant(task.start_ms),
            end = fmt_instant(task.end_ms),
            priority = task.priority.label(),
            title = task.title,
        );
    }

    let residual = overlap::residual_conflicts(board.tasks());
    if !residual.is_empty() {
        warn!(
            pairs = residual.len(),
            "schedule still contains overlaps (chained conflicts are resolved greedily)"
        );
    }

    if cli.list {
        info!("Board list:");
        for (index, task) in board.tasks().iter().enumerate() {
            info!("  {}. {}", index + 1, task.title);
        }
    }
}

/// Render epoch milliseconds as a readable UTC instant.
fn fmt_instant(ms: i64) -> String {
    DateTime::<Utc>::from_timestamp_millis(ms)
        .map(|dt| dt.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|| format!("{ms}ms"))
}
