//! Budget sweep: runs the two-pass experiment across every configured
//! budget fraction and seed-set sample, averaging results per budget.

use std::error::Error;
use std::fs;

use chrono::Local;
use contagion::coverage::selector::CoverageMethod;
use contagion::utils::logging;
use indicatif::{ProgressBar, ProgressStyle};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::config::Config;
use crate::experiment::run_experiment;
use crate::network_gen::preferential_attachment;
use crate::results::ExperimentResults;
use crate::seeds::choose_seeds;

fn budgets_from_fractions(fractions: &[f64], num_nodes: usize) -> Vec<usize> {
    fractions.iter().map(|f| (f * num_nodes as f64) as usize).collect()
}

/// Runs the full sweep and saves one JSON artifact per campaign into a
/// timestamped results directory. The network is generated once; each
/// sample draws a fresh seed component.
pub fn run_budget_sweep(config: &Config) -> Result<(), Box<dyn Error>> {
    let results_dir = format!(
        "simulator/results/sweep_budget_{}",
        Local::now().format("%Y%m%d_%H%M%S")
    );
    fs::create_dir_all(&results_dir)?;

    let mut rng = StdRng::seed_from_u64(config.network_config.rng_seed);
    let network = preferential_attachment(
        config.network_config.num_nodes,
        config.network_config.edges_per_node,
        &mut rng,
    );
    logging::log(
        "SIMULATOR",
        &format!(
            "generated network with {} nodes and {} edges",
            network.node_count(),
            network.edge_count()
        ),
    );

    let budgets = budgets_from_fractions(&config.blocking_config.budget_fractions, network.node_count());
    let samples = config.blocking_config.samples;
    let mut results = ExperimentResults::new(
        network.node_count(),
        network.edge_count(),
        config.contagion_config.threshold,
        config.contagion_config.seed_size,
    );

    let progress = ProgressBar::new((budgets.len() * samples) as u64);
    progress.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")?
            .progress_chars("#>-"),
    );

    for sample in 0..samples {
        let seeds = choose_seeds(
            &network,
            config.contagion_config.core_degree,
            config.contagion_config.seed_size,
            &mut rng,
        );
        for &budget in &budgets {
            progress.set_message(format!("sample {} budget {}", sample + 1, budget));
            let outcome = run_experiment(
                &network,
                &config.contagion_config,
                &seeds,
                budget,
                &CoverageMethod::Greedy,
                &mut rng,
            )?;
            results.record(&outcome);
            progress.inc(1);
        }
    }
    progress.finish_with_message("sweep complete");

    results.finalize();
    results.save(format!("{}/results.json", results_dir))?;
    Ok(())
}

/// Runs a single sample at the first configured budget and saves it; the
/// quick end-to-end check of the two-pass pipeline.
pub fn run_simple(config: &Config) -> Result<(), Box<dyn Error>> {
    let results_dir = "simulator/results";
    fs::create_dir_all(results_dir)?;

    let mut rng = StdRng::seed_from_u64(config.network_config.rng_seed);
    let network = preferential_attachment(
        config.network_config.num_nodes,
        config.network_config.edges_per_node,
        &mut rng,
    );
    let seeds = choose_seeds(
        &network,
        config.contagion_config.core_degree,
        config.contagion_config.seed_size,
        &mut rng,
    );
    let budget = (config.blocking_config.budget_fractions[0] * network.node_count() as f64) as usize;
    let outcome = run_experiment(
        &network,
        &config.contagion_config,
        &seeds,
        budget,
        &CoverageMethod::Greedy,
        &mut rng,
    )?;
    logging::log(
        "SIMULATOR",
        &format!(
            "no blocking: {} infected; coverage heuristic: {} infected",
            outcome.unblocked.total_infected(),
            outcome.cbh.total_infected()
        ),
    );

    let mut results = ExperimentResults::new(
        network.node_count(),
        network.edge_count(),
        config.contagion_config.threshold,
        config.contagion_config.seed_size,
    );
    results.record(&outcome);
    results.finalize();
    results.save(format!("{}/simple.json", results_dir))?;
    Ok(())
}
