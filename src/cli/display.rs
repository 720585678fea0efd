//! Text rendering of alignments and tallies.

use crate::core::edit::{EditKind, EditOp, EditTally};

/// Placeholder shown opposite an inserted or deleted unit
pub const GAP: char = '-';

/// Glyph shown under every edited position
pub const MARKER: char = '^';

/// Three aligned rows: source, target and edit markers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlignmentRows {
    pub source: String,
    pub target: String,
    pub markers: String,
}

/// Lay out an alignment column by column.
///
/// Every operation contributes as many columns as the longer of its two
/// sides; the shorter side is padded with [`GAP`].
#[must_use]
pub fn render_alignment(ops: &[EditOp<char>]) -> AlignmentRows {
    let mut rows = AlignmentRows {
        source: String::new(),
        target: String::new(),
        markers: String::new(),
    };

    for op in ops {
        let width = op.source.len().max(op.target.len());
        let marker = if op.is_edit() { MARKER } else { ' ' };
        for k in 0..width {
            rows.source.push(op.source.get(k).map_or(GAP, |&c| visible(c)));
            rows.target.push(op.target.get(k).map_or(GAP, |&c| visible(c)));
            rows.markers.push(marker);
        }
    }

    rows.markers = rows.markers.trim_end().to_string();
    rows
}

/// Render a tally as `{'S': 4, ' ': 1, 'a': 1, 'Total': 4}`.
///
/// Edits are keyed by their kind symbol, matches by the matched unit.
#[must_use]
pub fn format_tally(tally: &EditTally<char>) -> String {
    let mut entries: Vec<String> = tally
        .edits
        .iter()
        .map(|(kind, count)| format!("'{}': {count}", kind.symbol()))
        .collect();
    entries.extend(
        tally
            .matches
            .iter()
            .map(|(unit, count)| format!("{}: {count}", quote_unit(*unit))),
    );
    entries.push(format!("'Total': {}", tally.total));
    format!("{{{}}}", entries.join(", "))
}

/// One-line summary of every kind count
#[must_use]
pub fn format_counts(tally: &EditTally<char>) -> String {
    [
        EditKind::Match,
        EditKind::Substitute,
        EditKind::Insert,
        EditKind::Delete,
        EditKind::Transpose,
    ]
    .iter()
    .map(|kind| format!("{kind}: {}", tally.count(*kind)))
    .collect::<Vec<_>>()
    .join(", ")
}

fn quote_unit(unit: char) -> String {
    match unit {
        '\'' => "\"'\"".to_string(),
        '\n' => "'\\n'".to_string(),
        '\t' => "'\\t'".to_string(),
        c => format!("'{c}'"),
    }
}

/// Keep control characters from breaking the row layout
fn visible(c: char) -> char {
    match c {
        '\n' => '⏎',
        '\t' => '→',
        c if c.is_control() => '·',
        c => c,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::weights::WeightConfig;
    use crate::distance::engine::DistanceEngine;

    fn align(a: &str, b: &str, weights: WeightConfig) -> AlignmentRows {
        let trace = DistanceEngine::new(weights).unwrap().align_str(a, b);
        render_alignment(&trace.ops)
    }

    #[test]
    fn test_render_substitutions() {
        let rows = align("Fork Handles", "four candles", WeightConfig::default());
        assert_eq!(rows.source, "Fork Handles");
        assert_eq!(rows.target, "four candles");
        assert_eq!(rows.markers, "^ ^^ ^");
    }

    #[test]
    fn test_render_gaps() {
        let rows = align("kitten", "sitting", WeightConfig::default());
        assert_eq!(rows.source, "kitten-");
        assert_eq!(rows.target, "sitting");
        assert_eq!(rows.markers, "^   ^ ^");
    }

    #[test]
    fn test_render_transposition() {
        let rows = align("abcd", "acbd", WeightConfig::default().with_transposition(1.0));
        assert_eq!(rows.source, "abcd");
        assert_eq!(rows.target, "acbd");
        assert_eq!(rows.markers, " ^^");
    }

    #[test]
    fn test_render_control_characters() {
        let rows = align("a\nb", "a\nb", WeightConfig::default());
        assert_eq!(rows.source, "a⏎b");
        assert_eq!(rows.markers, "");
    }

    #[test]
    fn test_format_tally() {
        let trace = DistanceEngine::new(WeightConfig::default())
            .unwrap()
            .align_str("Fork Handles", "four candles");
        let text = format_tally(&trace.tally);

        assert!(text.starts_with("{'S': 4, ' ': 1, "));
        assert!(text.contains("'o': 1"));
        assert!(text.ends_with("'Total': 4}"));
    }

    #[test]
    fn test_format_counts() {
        let trace = DistanceEngine::new(WeightConfig::default())
            .unwrap()
            .align_str("ab", "b");
        assert_eq!(
            format_counts(&trace.tally),
            "match: 1, substitution: 0, insertion: 0, deletion: 1, transposition: 0"
        );
    }

    #[test]
    fn test_quote_unit() {
        assert_eq!(quote_unit('a'), "'a'");
        assert_eq!(quote_unit('\''), "\"'\"");
        assert_eq!(quote_unit('\n'), "'\\n'");
    }
}
