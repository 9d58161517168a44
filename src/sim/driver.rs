use rand::{SeedableRng, rngs::StdRng};

use super::job::generate_processes;
use crate::{
    config::SimConfig,
    core::{Observer, Process, ScheduleResult},
    scheduler::{MultilevelResult, MultilevelScheduler, Policy, Scheduler},
};

/// A simulation session: the current batch plus the generator that produced
/// it. Every run works on a copy of the batch, so repeated runs see the same
/// input until [`Sim::regenerate`] is called.
pub struct Sim {
    config: SimConfig,
    rng: StdRng,
    processes: Vec<Process>,
    observer: Observer,
}

impl Sim {
    pub fn new(config: SimConfig) -> Self {
        let mut rng = seeded_rng(&config);
        let processes = generate_processes(config.process_count(), &config, &mut rng);
        log::info!(
            "generated {} processes (seed {:?})",
            processes.len(),
            config.seed()
        );

        Self {
            config,
            rng,
            processes,
            observer: Observer::new(),
        }
    }

    /// Session over a caller-supplied batch. The generator is seeded from
    /// `config` but nothing is drawn from it until the first partition or
    /// regeneration.
    pub fn with_processes(config: SimConfig, processes: Vec<Process>) -> Self {
        Self {
            rng: seeded_rng(&config),
            config,
            processes,
            observer: Observer::new(),
        }
    }

    pub fn processes(&self) -> &[Process] {
        &self.processes
    }

    pub fn observer(&self) -> &Observer {
        &self.observer
    }

    /// Replaces the batch with a fresh draw of the configured size.
    pub fn regenerate(&mut self) -> &[Process] {
        self.processes = generate_processes(self.config.process_count(), &self.config, &mut self.rng);
        log::info!("regenerated {} processes", self.processes.len());
        &self.processes
    }

    /// The round robin policy at the configured quantum.
    pub fn round_robin(&self) -> Policy {
        Policy::RoundRobin {
            quantum: self.config.quantum(),
        }
    }

    pub fn run(&mut self, policy: Policy) -> ScheduleResult {
        let result = policy.schedule(&self.processes);
        self.observer.observe(&result);
        log::info!(
            "{policy}: avg waiting {:.2}, avg turnaround {:.2}",
            result.avg_waiting_time,
            result.avg_turnaround_time
        );
        result
    }

    pub fn run_multilevel(&mut self) -> MultilevelResult {
        let scheduler = MultilevelScheduler::new(self.config.quantum());
        let result = scheduler.schedule(&self.processes, &mut self.rng);
        for queue in &result.queues {
            self.observer.observe(&queue.result);
        }
        log::info!(
            "multilevel: queue sizes {:?}, overall avg waiting {:.2}",
            result.sizes(),
            result.overall_avg_waiting_time
        );
        result
    }
}

fn seeded_rng(config: &SimConfig) -> StdRng {
    match config.seed() {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    }
}
