//! Accumulation and saving of experiment results.
//!
//! Counts are summed across seed-set samples per budget, averaged, and
//! written as a JSON artifact alongside the campaign parameters.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use contagion::types::StatusCounts;
use contagion::utils::logging;
use serde::Serialize;

use crate::experiment::ExperimentOutcome;

/// Average per-status counts for one blocking strategy
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct AveragedCounts {
    pub susceptible: f64,
    pub infected_a: f64,
    pub infected_b: f64,
    pub infected_both: f64,
}

impl AveragedCounts {
    fn accumulate(&mut self, counts: &StatusCounts) {
        self.susceptible += counts.susceptible as f64;
        self.infected_a += counts.infected_a as f64;
        self.infected_b += counts.infected_b as f64;
        self.infected_both += counts.infected_both as f64;
    }

    fn divide(&mut self, samples: f64) {
        self.susceptible /= samples;
        self.infected_a /= samples;
        self.infected_b /= samples;
        self.infected_both /= samples;
    }
}

/// Accumulated results for one budget across samples
#[derive(Debug, Clone, Default, Serialize)]
pub struct BudgetRow {
    pub budget: usize,
    pub samples: usize,
    pub budget_a_avg: f64,
    pub budget_b_avg: f64,
    pub no_block: AveragedCounts,
    pub cbh: AveragedCounts,
    pub degree: AveragedCounts,
    pub random: AveragedCounts,
}

/// Results of a whole campaign, keyed by budget
#[derive(Debug, Serialize)]
pub struct ExperimentResults {
    pub network_nodes: usize,
    pub network_edges: usize,
    pub threshold: u32,
    pub seed_size: usize,
    rows: BTreeMap<usize, BudgetRow>,
}

impl ExperimentResults {
    pub fn new(network_nodes: usize, network_edges: usize, threshold: u32, seed_size: usize) -> Self {
        Self {
            network_nodes,
            network_edges,
            threshold,
            seed_size,
            rows: BTreeMap::new(),
        }
    }

    pub fn record(&mut self, outcome: &ExperimentOutcome) {
        let row = self.rows.entry(outcome.budget).or_insert_with(|| BudgetRow {
            budget: outcome.budget,
            ..BudgetRow::default()
        });
        row.samples += 1;
        row.budget_a_avg += outcome.split.budget_a as f64;
        row.budget_b_avg += outcome.split.budget_b as f64;
        row.no_block.accumulate(&outcome.unblocked);
        row.cbh.accumulate(&outcome.cbh);
        row.degree.accumulate(&outcome.degree);
        row.random.accumulate(&outcome.random);
    }

    /// Converts accumulated sums into per-sample averages
    pub fn finalize(&mut self) {
        for row in self.rows.values_mut() {
            let samples = row.samples.max(1) as f64;
            row.budget_a_avg /= samples;
            row.budget_b_avg /= samples;
            row.no_block.divide(samples);
            row.cbh.divide(samples);
            row.degree.divide(samples);
            row.random.divide(samples);
        }
    }

    pub fn rows(&self) -> impl Iterator<Item = &BudgetRow> {
        self.rows.values()
    }

    /// Writes the results as pretty-printed JSON
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), std::io::Error> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path.as_ref(), json)?;
        logging::log(
            "SIMULATOR",
            &format!("saved results for {} budgets to {}", self.rows.len(), path.as_ref().display()),
        );
        Ok(())
    }
}
