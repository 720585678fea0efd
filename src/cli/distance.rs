//! Distance command - weighted edit distance between two strings.
//!
//! Case-folding and file loading happen here, before the strings reach the
//! engine. With `--trace` or `--align` the full cost table is built, which is
//! bounded by [`MAX_TRACE_CELLS`](crate::utils::validation::MAX_TRACE_CELLS).

use std::path::Path;

use clap::Args;

use crate::cli::display::{format_counts, format_tally, render_alignment};
use crate::cli::{OutputFormat, WeightArgs};
use crate::core::edit::EditKind;
use crate::core::weights::WeightConfig;
use crate::distance::engine::{Computation, DistanceEngine};
use crate::utils::validation::{check_trace_size, read_text_file};

/// Arguments for the distance command
#[derive(Args)]
pub struct DistanceArgs {
    /// Source string (or path with --files)
    #[arg(required = true)]
    pub source: String,

    /// Target string (or path with --files)
    #[arg(required = true)]
    pub target: String,

    #[command(flatten)]
    pub weights: WeightArgs,

    /// Lower-case both inputs before comparing
    #[arg(long)]
    pub ignore_case: bool,

    /// Report the operation tally of a minimum-cost alignment
    #[arg(long)]
    pub trace: bool,

    /// Print both inputs aligned, with a marker under every edit (implies --trace)
    #[arg(long)]
    pub align: bool,

    /// Treat SOURCE and TARGET as paths to text files
    #[arg(long)]
    pub files: bool,
}

/// Execute the distance command
///
/// # Errors
///
/// Returns an error if inputs cannot be read, a weight is invalid, or a
/// requested trace would exceed the table size limit.
#[allow(clippy::needless_pass_by_value)]
pub fn run(args: DistanceArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let weights = args.weights.resolve()?;
    let engine = DistanceEngine::new(weights)?;

    let (mut source, mut target) = if args.files {
        (
            read_text_file(Path::new(&args.source))?,
            read_text_file(Path::new(&args.target))?,
        )
    } else {
        (args.source.clone(), args.target.clone())
    };
    if args.ignore_case {
        source = source.to_lowercase();
        target = target.to_lowercase();
    }

    let source: Vec<char> = source.chars().collect();
    let target: Vec<char> = target.chars().collect();
    let want_trace = args.trace || args.align;

    if verbose {
        eprintln!(
            "Comparing {} x {} characters ({})",
            source.len(),
            target.len(),
            describe_weights(&weights),
        );
    }

    if want_trace {
        if let Some(message) = check_trace_size(source.len(), target.len()) {
            anyhow::bail!(message);
        }
    }

    let result = engine.compute(&source, &target, want_trace);

    match format {
        OutputFormat::Text => print_text_result(&result, args.align),
        OutputFormat::Json => print_json_result(&result, &weights, args.align)?,
        OutputFormat::Tsv => print_tsv_result(&result),
    }

    Ok(())
}

fn describe_weights(weights: &WeightConfig) -> String {
    let transposition = weights
        .transposition
        .map_or_else(|| "disabled".to_string(), |w| w.to_string());
    format!(
        "substitution {}, deletion {}, insertion {}, transposition {}",
        weights.substitution, weights.deletion, weights.insertion, transposition
    )
}

fn print_text_result(result: &Computation<char>, align: bool) {
    println!("Distance: {}", result.distance);

    let Some(trace) = &result.trace else {
        return;
    };

    println!("Tally: {}", format_tally(&trace.tally));
    println!(
        "Operations: {} ({})",
        trace.tally.operation_count(),
        format_counts(&trace.tally)
    );

    if align {
        let rows = render_alignment(&trace.ops);
        println!();
        println!("{}", rows.source);
        println!("{}", rows.target);
        println!("{}", rows.markers);
    }
}

fn print_json_result(
    result: &Computation<char>,
    weights: &WeightConfig,
    align: bool,
) -> anyhow::Result<()> {
    let mut output = serde_json::json!({
        "distance": result.distance,
        "weights": weights,
    });

    if let Some(trace) = &result.trace {
        let edits: serde_json::Map<String, serde_json::Value> = trace
            .tally
            .edits
            .iter()
            .map(|(kind, count)| (kind.symbol().to_string(), serde_json::json!(count)))
            .collect();
        let matches: serde_json::Map<String, serde_json::Value> = trace
            .tally
            .matches
            .iter()
            .map(|(unit, count)| (unit.to_string(), serde_json::json!(count)))
            .collect();
        let ops: Vec<serde_json::Value> = trace
            .ops
            .iter()
            .map(|op| {
                serde_json::json!({
                    "op": op.kind.symbol().to_string(),
                    "source_pos": op.source_pos,
                    "target_pos": op.target_pos,
                    "source": op.source.iter().collect::<String>(),
                    "target": op.target.iter().collect::<String>(),
                })
            })
            .collect();

        output["tally"] = serde_json::json!({
            "edits": edits,
            "matches": matches,
            "total": trace.tally.total,
            "operations": trace.tally.operation_count(),
        });
        output["ops"] = serde_json::json!(ops);

        if align {
            let rows = render_alignment(&trace.ops);
            output["alignment"] = serde_json::json!({
                "source": rows.source,
                "target": rows.target,
                "markers": rows.markers,
            });
        }
    }

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn print_tsv_result(result: &Computation<char>) {
    let Some(trace) = &result.trace else {
        println!("distance");
        println!("{}", result.distance);
        return;
    };

    println!("distance\tmatches\tsubstitutions\tinsertions\tdeletions\ttranspositions\toperations");
    println!(
        "{}\t{}\t{}\t{}\t{}\t{}\t{}",
        result.distance,
        trace.tally.count(EditKind::Match),
        trace.tally.count(EditKind::Substitute),
        trace.tally.count(EditKind::Insert),
        trace.tally.count(EditKind::Delete),
        trace.tally.count(EditKind::Transpose),
        trace.tally.operation_count(),
    );
}
