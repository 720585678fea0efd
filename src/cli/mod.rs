//! Command-line interface for edit-solver.
//!
//! This module implements the CLI using clap. Available commands:
//!
//! - **distance**: Weighted edit distance between two strings, with optional trace and alignment
//! - **fuzzy**: Rank candidate strings against a query by token similarity
//!
//! ## Usage
//!
//! ```text
//! # Levenshtein distance with an operation tally
//! edit-solver distance "Fork Handles" "four candles" --trace
//!
//! # Damerau-Levenshtein with aligned output
//! edit-solver distance abcd acbd -t 1 --align
//!
//! # Compare two files, distance only
//! edit-solver distance --files draft.txt final.txt
//!
//! # Fuzzy match, JSON output for scripting
//! edit-solver fuzzy "I am Sam" "sam I am" "Sam I am not" --ignore-case --format json
//! ```

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};

use crate::core::weights::WeightConfig;

pub mod display;
pub mod distance;
pub mod fuzzy;

#[derive(Parser)]
#[command(name = "edit-solver")]
#[command(author = "Fulcrum Genomics")]
#[command(version)]
#[command(about = "Weighted edit distance, alignment traces and fuzzy matching")]
#[command(
    long_about = "edit-solver computes weighted Levenshtein or Damerau-Levenshtein distances.\n\nIt can:\n- Report the minimum-cost sequence of substitutions, insertions, deletions and transpositions\n- Render the two inputs aligned with markers under every edit\n- Rank candidate strings against a multi-word query"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Edit distance between two strings
    Distance(distance::DistanceArgs),

    /// Rank candidates against a query
    Fuzzy(fuzzy::FuzzyArgs),
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Tsv,
}

/// Edit weight options shared by every command
#[derive(clap::Args, Debug, Clone, Default)]
pub struct WeightArgs {
    /// Weight for substitution (default 1)
    #[arg(short = 's', long, allow_negative_numbers = true)]
    pub sub_weight: Option<f64>,

    /// Weight for deletion (default 1)
    #[arg(short = 'd', long, allow_negative_numbers = true)]
    pub del_weight: Option<f64>,

    /// Weight for insertion (default 1)
    #[arg(short = 'i', long, allow_negative_numbers = true)]
    pub ins_weight: Option<f64>,

    /// Weight for transposition; enables Damerau-Levenshtein when given
    #[arg(short = 't', long, allow_negative_numbers = true)]
    pub trans_weight: Option<f64>,

    /// JSON file with weights; individual weight flags override its values
    #[arg(long, value_name = "FILE")]
    pub weights: Option<PathBuf>,
}

impl WeightArgs {
    /// Merge the weights file (if any) with the individual flags and validate.
    ///
    /// # Errors
    ///
    /// Returns an error if the weights file cannot be loaded or a weight is invalid.
    pub fn resolve(&self) -> anyhow::Result<WeightConfig> {
        let mut weights = match &self.weights {
            Some(path) => WeightConfig::load_from_file(path)
                .with_context(|| format!("Loading weights from {}", path.display()))?,
            None => WeightConfig::default(),
        };

        if let Some(w) = self.sub_weight {
            weights.substitution = w;
        }
        if let Some(w) = self.del_weight {
            weights.deletion = w;
        }
        if let Some(w) = self.ins_weight {
            weights.insertion = w;
        }
        if let Some(w) = self.trans_weight {
            weights.transposition = Some(w);
        }

        weights.validate()?;
        Ok(weights)
    }
}
