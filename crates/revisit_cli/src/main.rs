//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to exercise `revisit_core` directly.
//! - Keep output deterministic for a given start date and day of run.

use std::process::ExitCode;

fn main() -> ExitCode {
    let today = chrono::Local::now().date_naive();
    let start_date = std::env::args()
        .nth(1)
        .unwrap_or_else(|| today.to_string());

    let checkpoints = match revisit_core::generate_schedule(&start_date, today) {
        Ok(checkpoints) => checkpoints,
        Err(err) => {
            eprintln!("revisit: {err}");
            return ExitCode::FAILURE;
        }
    };

    println!("revisit_core version={}", revisit_core::core_version());
    println!("schedule for start date {start_date}:");
    for checkpoint in &checkpoints {
        println!("  {:<9} {}", checkpoint.label(), checkpoint.date);
    }

    ExitCode::SUCCESS
}
