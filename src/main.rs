use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use sched_model::{
    Policy, Sim, SimConfig,
    report::{render_multilevel, render_processes, render_schedule},
};

#[derive(Debug, PartialEq)]
enum Choice {
    Run(Policy),
    Multilevel,
    Display,
    Regenerate,
    Exit,
}

fn main() -> Result<()> {
    env_logger::init();

    let config = SimConfig::from_env().context("invalid simulator configuration")?;
    let mut sim = Sim::new(config);

    let rule = "=".repeat(80);
    println!("{rule}");
    println!("{:^80}", "CPU SCHEDULING ALGORITHM SIMULATOR");
    println!("{rule}");
    println!(
        "\nGenerated {} random processes for testing.",
        sim.processes().len()
    );

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        let Some(choice) = prompt(&mut lines, &sim)? else {
            // stdin closed
            return Ok(());
        };

        match choice {
            Choice::Run(policy) => print!("\n{}", render_schedule(&sim.run(policy))),
            Choice::Multilevel => print!("\n{}", render_multilevel(&sim.run_multilevel())),
            Choice::Display => print!("\n{}", render_processes(sim.processes())),
            Choice::Regenerate => {
                let count = sim.regenerate().len();
                println!("\nDone! Generated {count} new processes.");
            }
            Choice::Exit => {
                println!("\nGoodbye!");
                return Ok(());
            }
        }
    }
}

// Reprompts until the user enters a valid option; None once input runs out
fn prompt(lines: &mut impl Iterator<Item = io::Result<String>>, sim: &Sim) -> Result<Option<Choice>> {
    loop {
        print_menu();
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            return Ok(None);
        };
        let line = line.context("failed to read menu choice")?;

        let choice = match line.trim().parse::<u8>() {
            Ok(1) => Choice::Run(Policy::Fcfs),
            Ok(2) => Choice::Run(Policy::Sjf),
            Ok(3) => Choice::Run(Policy::Priority),
            Ok(4) => Choice::Run(sim.round_robin()),
            Ok(5) => Choice::Multilevel,
            Ok(8) => Choice::Display,
            Ok(9) => Choice::Regenerate,
            Ok(0) => Choice::Exit,
            _ => {
                println!("\nInvalid option! Please enter a valid choice (0-9).");
                continue;
            }
        };
        return Ok(Some(choice));
    }
}

fn print_menu() {
    let rule = "=".repeat(60);
    println!("\n{rule}");
    println!("{:^60}", "SCHEDULING ALGORITHMS MENU");
    println!("{rule}");
    println!("1. First Come First Served (FCFS)");
    println!("2. Shortest Job First (SJF)");
    println!("3. Priority Scheduling");
    println!("4. Round Robin (RR)");
    println!("5. Multilevel Queue Scheduling");
    println!("{}", "-".repeat(60));
    println!("8. Display Current Processes");
    println!("9. Generate New Processes");
    println!("0. Exit Program");
    println!("{rule}");
    print!("Enter your choice (0-9): ");
}
