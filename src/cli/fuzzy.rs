//! Fuzzy command - rank candidate strings against a query.

use clap::Args;

use crate::cli::{OutputFormat, WeightArgs};
use crate::matching::engine::{FuzzyMatcher, Match, MatcherConfig, DEFAULT_SCORE_SCALE};
use crate::matching::scoring::ScoringMode;

/// Arguments for the fuzzy command
#[derive(Args)]
pub struct FuzzyArgs {
    /// The string to search for
    #[arg(required = true)]
    pub query: String,

    /// The string (or strings) to search in
    #[arg(required = true)]
    pub candidates: Vec<String>,

    #[command(flatten)]
    pub weights: WeightArgs,

    /// Drop candidates whose closest token pair is farther than this edit distance
    #[arg(short = 'm', long, allow_negative_numbers = true)]
    pub min_distance: Option<f64>,

    /// How query and candidate tokens are compared
    #[arg(long, value_enum, default_value = "best-token")]
    pub mode: ScoringMode,

    /// Similarity contributions below this count as 0
    #[arg(long, allow_negative_numbers = true)]
    pub threshold: Option<f64>,

    /// Multiplier applied to every score
    #[arg(long, default_value_t = DEFAULT_SCORE_SCALE, allow_negative_numbers = true)]
    pub scale: f64,

    /// Compare case-insensitively; matches are printed as given
    #[arg(long)]
    pub ignore_case: bool,

    /// Only show candidates with a non-zero score
    #[arg(long)]
    pub nonzero: bool,

    /// Maximum number of matches to show
    #[arg(short = 'n', long)]
    pub limit: Option<usize>,
}

/// Execute the fuzzy command
///
/// # Errors
///
/// Returns an error if a weight is invalid or the weights file cannot be loaded.
#[allow(clippy::needless_pass_by_value)]
pub fn run(args: FuzzyArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    check_options(&args)?;

    let config = MatcherConfig {
        weights: args.weights.resolve()?,
        min_distance: args.min_distance,
        mode: args.mode,
        similarity_threshold: args.threshold,
        score_scale: args.scale,
        drop_zero_scores: args.nonzero,
        ignore_case: args.ignore_case,
    };
    let matcher = FuzzyMatcher::new(config)?;

    if verbose {
        eprintln!(
            "Matching query against {} candidates ({:?} scoring)",
            args.candidates.len(),
            matcher.config().mode
        );
    }

    let mut matches = matcher.run(&args.query, &args.candidates);
    if let Some(limit) = args.limit {
        matches.truncate(limit);
    }

    match format {
        OutputFormat::Text => print_text_results(&matches),
        OutputFormat::Json => print_json_results(&matches)?,
        OutputFormat::Tsv => print_tsv_results(&matches),
    }

    Ok(())
}

/// Reject scoring options that would make the ranking meaningless
fn check_options(args: &FuzzyArgs) -> anyhow::Result<()> {
    if !args.scale.is_finite() || args.scale < 0.0 {
        anyhow::bail!(
            "Invalid --scale: {} (must be finite and non-negative)",
            args.scale
        );
    }
    if let Some(cutoff) = args.min_distance {
        if !cutoff.is_finite() || cutoff < 0.0 {
            anyhow::bail!("Invalid --min-distance: {cutoff} (must be finite and non-negative)");
        }
    }
    if let Some(threshold) = args.threshold {
        if !threshold.is_finite() {
            anyhow::bail!("Invalid --threshold: {threshold} (must be finite)");
        }
    }
    Ok(())
}

fn print_text_results(matches: &[Match]) {
    if matches.is_empty() {
        println!("No matches found.");
        return;
    }

    for m in matches {
        println!("{:>8.4}  {}", m.score, m.candidate);
    }
}

fn print_json_results(matches: &[Match]) -> anyhow::Result<()> {
    let output: Vec<serde_json::Value> = matches
        .iter()
        .enumerate()
        .map(|(i, m)| {
            serde_json::json!({
                "rank": i + 1,
                "query": m.query,
                "candidate": m.candidate,
                "score": m.score,
                "best_distance": m.best_distance,
            })
        })
        .collect();

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn print_tsv_results(matches: &[Match]) {
    println!("rank\tscore\tbest_distance\tcandidate");
    for (i, m) in matches.iter().enumerate() {
        let best = m.best_distance.map_or_else(String::new, |d| d.to_string());
        println!("{}\t{:.4}\t{}\t{}", i + 1, m.score, best, m.candidate);
    }
}
