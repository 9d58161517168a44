//! Text rendering of batches and results. Nothing here computes metrics.

use std::fmt::Write;

use crate::core::{Process, SchedEvent, ScheduleResult};
use crate::scheduler::{MultilevelResult, Policy};

const WIDE: usize = 60;

fn rule(out: &mut String, c: char, width: usize) {
    out.extend(std::iter::repeat_n(c, width));
    out.push('\n');
}

pub fn render_processes(processes: &[Process]) -> String {
    let mut out = String::new();
    rule(&mut out, '=', 50);
    let _ = writeln!(out, "PROCESS LIST ({} processes)", processes.len());
    rule(&mut out, '=', 50);
    let _ = writeln!(out, "{:>8}{:>12}{:>12}", "ID", "Burst Time", "Priority");
    rule(&mut out, '-', 50);
    for p in processes {
        let _ = writeln!(out, "{:>8}{:>12}{:>12}", p.id(), p.burst_time(), p.priority());
    }
    rule(&mut out, '=', 50);
    out
}

/// Per-process table, the averages and the CPU timeline.
pub fn render_schedule(result: &ScheduleResult) -> String {
    let mut out = String::new();
    rule(&mut out, '=', WIDE);
    let _ = writeln!(out, "{}", heading(result.policy));
    rule(&mut out, '=', WIDE);
    let _ = writeln!(
        out,
        "{:>8}{:>12}{:>12}{:>15}{:>18}",
        "Process", "Burst Time", "Priority", "Waiting Time", "Turnaround Time"
    );
    rule(&mut out, '-', WIDE);
    for e in &result.entries {
        let _ = writeln!(
            out,
            "{:>8}{:>12}{:>12}{:>15}{:>18}",
            e.process.id(),
            e.process.burst_time(),
            e.process.priority(),
            e.waiting_time,
            e.turnaround_time
        );
    }
    rule(&mut out, '-', WIDE);
    let _ = writeln!(out, "Average Waiting Time: {:.2}", result.avg_waiting_time);
    let _ = writeln!(out, "Average Turnaround Time: {:.2}", result.avg_turnaround_time);
    if !result.events.is_empty() {
        let _ = writeln!(out, "Timeline: {}", render_timeline(&result.events));
    }
    rule(&mut out, '=', WIDE);
    out
}

fn heading(policy: Policy) -> String {
    match policy {
        Policy::RoundRobin { quantum } => format!("ROUND ROBIN SCHEDULING (Quantum = {quantum})"),
        other => format!("{} SCHEDULING", other.to_string().to_uppercase()),
    }
}

/// One-line Gantt strip, e.g. `|P0 0-4|P1 4-7|`.
pub fn render_timeline(events: &[SchedEvent]) -> String {
    let mut out = String::from("|");
    for event in events {
        if let SchedEvent::Dispatched { pid, at, ran } = *event {
            let _ = write!(out, "P{pid} {at}-{}|", at + ran);
        }
    }
    out
}

pub fn render_multilevel(result: &MultilevelResult) -> String {
    let mut out = String::new();
    rule(&mut out, '=', 70);
    out.push_str("MULTILEVEL QUEUE SCHEDULING\n");
    rule(&mut out, '=', 70);

    for queue in &result.queues {
        let _ = writeln!(out, "\nQueue {}: {}", queue.level, queue.policy());
        rule(&mut out, '-', 50);
        if queue.result.is_empty() {
            let _ = writeln!(out, "No processes in Queue {}", queue.level);
            continue;
        }
        out.push_str(&render_schedule(&queue.result));
        if queue.level > 0 {
            let earlier = (0..queue.level)
                .map(|l| l.to_string())
                .collect::<Vec<_>>()
                .join(" & ");
            let _ = writeln!(
                out,
                "Average Waiting Time (including Queue {earlier}, offset {}): {:.2}",
                queue.time_offset, queue.adjusted_avg_waiting_time
            );
        }
    }

    out.push('\n');
    rule(&mut out, '=', 70);
    out.push_str("MULTILEVEL QUEUE SUMMARY\n");
    rule(&mut out, '=', 70);
    for queue in &result.queues {
        let _ = writeln!(
            out,
            "Queue {} ({}): {} processes",
            queue.level,
            queue.policy(),
            queue.size()
        );
    }
    let _ = writeln!(
        out,
        "Overall Average Waiting Time: {:.2}",
        result.overall_avg_waiting_time
    );
    rule(&mut out, '=', 70);
    out
}
