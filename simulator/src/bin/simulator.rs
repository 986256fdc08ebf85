use std::fs;
use std::process;

use contagion::utils::logging;
use simulator::config::Config;
use simulator::interface::{SimulationType, SimulatorInterface};
use simulator::sweep::{run_budget_sweep, run_simple};

fn main() {
    logging::init_logging();
    fs::create_dir_all("simulator/results").expect("Failed to create results directory");

    let config = match Config::load("simulator/config.toml") {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error loading configuration: {}", e);
            process::exit(1);
        }
    };

    let interface = SimulatorInterface::new();
    loop {
        interface.show_menu();
        let Some(choice) = interface.get_user_choice() else {
            println!("Invalid selection, try again.");
            continue;
        };
        let result = match choice {
            SimulationType::Simple => run_simple(&config),
            SimulationType::SweepBudget => run_budget_sweep(&config),
            SimulationType::Exit => break,
        };
        if let Err(e) = result {
            eprintln!("Simulation failed: {}", e);
            process::exit(1);
        }
    }
}
