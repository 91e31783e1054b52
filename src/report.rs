//! Text and JSON rendering of a [`Comparison`].

use std::fmt::Write as _;

use crate::analysis::{Comparison, PerformanceMetrics};
use crate::error::Result;

const SEPARATOR: &str = "---------------------------";

/// Renders the console report: FCFS, SJF, then one block per sweep cell.
pub fn render_text(cmp: &Comparison) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "First-Come, First-Served Scheduling:");
    write_metrics(&mut out, &cmp.fcfs);

    let _ = writeln!(out, "\nShortest-Job-First Scheduling:");
    write_metrics(&mut out, &cmp.sjf);

    let _ = writeln!(out, "\nRound-Robin Scheduling Analysis:");
    for r in &cmp.round_robin {
        let _ = writeln!(
            out,
            "Round Robin with Quantum: {}ms and Overhead: {}ms",
            r.quantum_ms, r.overhead_ms
        );
        let _ = writeln!(out, "Average Waiting Time: {:.2} seconds", r.avg_waiting_time);
        let _ = writeln!(
            out,
            "Average Turnaround Time: {:.2} seconds",
            r.avg_turnaround_time
        );
        let _ = writeln!(out, "Total Simulation Time: {:.2} seconds", r.total_time);
        let _ = writeln!(out, "Average Ready Queue Length: {:.2}", r.avg_queue_length);
        let _ = writeln!(out, "Maximum Ready Queue Length: {}", r.max_queue_length);
        let _ = writeln!(out, "{SEPARATOR}");
    }

    out
}

fn write_metrics(out: &mut String, metrics: &PerformanceMetrics) {
    let _ = writeln!(
        out,
        "Average Waiting Time: {:.2} seconds",
        metrics.avg_waiting_time
    );
    let _ = writeln!(
        out,
        "Average Turnaround Time: {:.2} seconds",
        metrics.avg_turnaround_time
    );
}

/// Renders the comparison as pretty-printed JSON.
pub fn render_json(cmp: &Comparison) -> Result<String> {
    Ok(serde_json::to_string_pretty(cmp)?)
}
