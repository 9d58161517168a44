use std::collections::VecDeque;

use pretty_assertions::assert_eq;
use rand::{SeedableRng, rngs::StdRng};

use super::{assert_close, bursts, quantum};
use crate::config::SimConfig;
use crate::core::{Process, SchedEvent, Ticks, total_burst};
use crate::scheduler::{Policy, RoundRobinScheduler, Scheduler};
use crate::sim::generate_processes;

#[test]
fn worked_example() {
    let result = RoundRobinScheduler::new(quantum(4)).schedule(&bursts(&[5, 3, 1]));

    assert_eq!(result.pids(), vec![0, 1, 2]);
    assert_eq!(result.waiting_times(), vec![4, 4, 7]);
    assert_eq!(result.turnaround_times(), vec![9, 7, 8]);
    assert_close(result.avg_waiting_time, 5.0);
    assert_close(result.avg_turnaround_time, 8.0);
}

#[test]
fn worked_example_timeline() {
    let result = RoundRobinScheduler::new(quantum(4)).schedule(&bursts(&[5, 3, 1]));

    assert_eq!(
        result.events,
        vec![
            SchedEvent::Dispatched { pid: 0, at: 0, ran: 4 },
            SchedEvent::Preempted { pid: 0, at: 4, remaining: 1 },
            SchedEvent::Dispatched { pid: 1, at: 4, ran: 3 },
            SchedEvent::Completed { pid: 1, at: 7 },
            SchedEvent::Dispatched { pid: 2, at: 7, ran: 1 },
            SchedEvent::Completed { pid: 2, at: 8 },
            SchedEvent::Dispatched { pid: 0, at: 8, ran: 1 },
            SchedEvent::Completed { pid: 0, at: 9 },
        ]
    );
}

#[test]
fn preempted_processes_finish_on_later_passes() {
    // Pass 1: P0 0-4, P1 4-6 done, P2 6-10
    // Pass 2: P0 10-14, P2 14-18
    // Pass 3: P0 18-20 done, P2 20-22 done
    let result = RoundRobinScheduler::new(quantum(4)).schedule(&bursts(&[10, 2, 10]));

    assert_eq!(result.waiting_times(), vec![10, 4, 12]);
    assert_eq!(result.makespan(), 22);
}

#[test]
fn large_quantum_degenerates_to_fcfs() {
    let processes = bursts(&[5, 3, 1, 8]);
    let rr = RoundRobinScheduler::new(quantum(100)).schedule(&processes);
    let fcfs = Policy::Fcfs.schedule(&processes);

    assert_eq!(rr.waiting_times(), fcfs.waiting_times());
    assert_eq!(rr.turnaround_times(), fcfs.turnaround_times());
}

#[test]
fn burst_equal_to_quantum_finishes_in_one_visit() {
    let result = RoundRobinScheduler::new(quantum(3)).schedule(&bursts(&[3, 3]));

    assert_eq!(result.waiting_times(), vec![0, 3]);
    assert!(
        !result
            .events
            .iter()
            .any(|e| matches!(e, SchedEvent::Preempted { .. }))
    );
}

#[test]
fn empty_batch_averages_are_zero() {
    let result = RoundRobinScheduler::new(quantum(4)).schedule(&[]);

    assert!(result.is_empty());
    assert_eq!(result.avg_waiting_time, 0.0);
    assert_eq!(result.avg_turnaround_time, 0.0);
}

#[test]
fn zero_quantum_is_rejected() {
    assert!(Policy::round_robin(0).is_err());
    assert_eq!(
        Policy::round_robin(4).unwrap(),
        Policy::RoundRobin { quantum: quantum(4) }
    );
}

#[test]
fn completions_are_monotonic_and_cover_all_work() {
    let config = SimConfig::default();
    let mut rng = StdRng::seed_from_u64(3);

    for q in 1..=6 {
        let processes = generate_processes(10, &config, &mut rng);
        let result = RoundRobinScheduler::new(quantum(q)).schedule(&processes);

        let completions: Vec<u64> = result
            .events
            .iter()
            .filter_map(|e| match *e {
                SchedEvent::Completed { at, .. } => Some(at),
                _ => None,
            })
            .collect();
        assert_eq!(completions.len(), processes.len());
        assert!(completions.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(result.makespan(), total_burst(&processes));

        for e in &result.entries {
            assert_eq!(e.turnaround_time, e.waiting_time + e.process.burst_time());
            assert_eq!(e.completion_time, e.turnaround_time);
        }
    }
}

// Ready queue that pushes a preempted process to the back right away
fn fifo_requeue_waits(processes: &[Process], quantum: Ticks) -> Vec<Ticks> {
    let mut remaining: Vec<Ticks> = processes.iter().map(|p| p.burst_time()).collect();
    let mut waiting = vec![0; processes.len()];
    let mut ready: VecDeque<usize> = (0..processes.len()).collect();
    let mut now = 0;

    while let Some(i) = ready.pop_front() {
        let ran = remaining[i].min(quantum);
        now += ran;
        remaining[i] -= ran;
        if remaining[i] > 0 {
            ready.push_back(i);
        } else {
            waiting[i] = now - processes[i].burst_time();
        }
    }
    waiting
}

#[test]
fn full_scan_matches_fifo_requeue_without_arrivals() {
    let config = SimConfig::default();
    let mut rng = StdRng::seed_from_u64(21);

    for q in 1..=6 {
        for _ in 0..50 {
            let processes = generate_processes(8, &config, &mut rng);
            let result = RoundRobinScheduler::new(quantum(q)).schedule(&processes);
            assert_eq!(result.waiting_times(), fifo_requeue_waits(&processes, q));
        }
    }
}
