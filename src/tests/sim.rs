use pretty_assertions::assert_eq;

use super::{assert_close, bursts};
use crate::config::SimConfig;
use crate::scheduler::Policy;
use crate::sim::Sim;

fn seeded(seed: u64) -> SimConfig {
    SimConfig::default().with_seed(Some(seed))
}

#[test]
fn generated_batch_respects_config() {
    let config = SimConfig::new(50, 4, 2..=6, 1..=3).unwrap().with_seed(Some(8));
    let sim = Sim::new(config);

    let processes = sim.processes();
    assert_eq!(processes.len(), 50);
    for (i, p) in processes.iter().enumerate() {
        assert_eq!(p.id(), i as u64);
        assert!((2..=6).contains(&p.burst_time()));
        assert!((1..=3).contains(&p.priority()));
    }
}

#[test]
fn same_seed_same_batch() {
    let a = Sim::new(seeded(1234));
    let b = Sim::new(seeded(1234));
    assert_eq!(a.processes(), b.processes());
}

#[test]
fn regenerate_keeps_size_and_draws_new_batch() {
    let mut sim = Sim::new(seeded(5));
    let before = sim.processes().to_vec();

    let after = sim.regenerate().to_vec();
    assert_eq!(after.len(), before.len());
    assert_ne!(after, before);
}

#[test]
fn runs_leave_batch_untouched() {
    let mut sim = Sim::new(seeded(17));
    let before = sim.processes().to_vec();

    let _ = sim.run(Policy::Sjf);
    let _ = sim.run(Policy::Priority);
    let _ = sim.run_multilevel();

    assert_eq!(sim.processes(), before.as_slice());
}

#[test]
fn runs_are_observed() {
    let mut sim = Sim::new(seeded(2));

    let _ = sim.run(Policy::Fcfs);
    let rr = sim.round_robin();
    let _ = sim.run(rr);
    assert_eq!(sim.observer().observed(), 2);

    let _ = sim.run_multilevel();
    assert_eq!(sim.observer().observed(), 5);
}

#[test]
fn caller_supplied_batch() {
    let mut sim = Sim::with_processes(seeded(0), bursts(&[5, 3, 1]));

    let fcfs = sim.run(Policy::Fcfs);
    assert_close(fcfs.avg_waiting_time, 13.0 / 3.0);

    let rr = sim.round_robin();
    let rr = sim.run(rr);
    assert_close(rr.avg_waiting_time, 5.0);

    let multilevel = sim.run_multilevel();
    assert_eq!(multilevel.sizes().iter().sum::<usize>(), 3);
}

#[test]
fn supplied_batch_partition_ignores_process_count() {
    let processes = bursts(&[4, 7, 2, 9, 1, 5]);
    let small = SimConfig::new(1, 4, 1..=20, 1..=3).unwrap().with_seed(Some(9));
    let large = SimConfig::new(50, 4, 1..=20, 1..=3).unwrap().with_seed(Some(9));

    let a = Sim::with_processes(small, processes.clone()).run_multilevel();
    let b = Sim::with_processes(large, processes).run_multilevel();
    assert_eq!(a, b);
}
