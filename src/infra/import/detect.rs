use tracing::warn;

use crate::domain::entities::template::{Language, TemplateKind};
use crate::infra::import::signature::SIGNATURES;
use crate::usecase::ports::source::TableSource;

/// Infers which supported language a template's header row is written in.
///
/// A source that cannot be read is not an error from the caller's point of
/// view: the failure is logged and the default language is reported, so
/// downstream column mapping simply proceeds against the default
/// vocabulary.
pub fn detect_template_language(source: &mut dyn TableSource, kind: TemplateKind) -> Language {
    match source.read_rows() {
        Ok(rows) => detect_from_rows(&rows, kind),
        Err(err) => {
            warn!(
                source = %source.label(),
                kind = %kind,
                "template language detection failed to read source, assuming {}: {err}",
                Language::default()
            );
            Language::default()
        }
    }
}

/// Row 0 is the header row. Every signature language is scored against it;
/// the first language (in declaration order) with the strictly highest
/// score wins, and an all-zero score set falls back to the default.
pub fn detect_from_rows(rows: &[Vec<String>], kind: TemplateKind) -> Language {
    let Some(headers) = rows.first() else {
        return Language::default();
    };

    let mut best = Language::default();
    let mut best_score = 0.0_f64;
    for signature in SIGNATURES {
        let score = header_match_score(headers, signature.columns(kind));
        if score > best_score {
            best = signature.language;
            best_score = score;
        }
    }

    best
}

/// Fraction of the canonical columns present among the header cells.
///
/// A canonical column counts as present when some header cell contains it
/// or is contained by it, case-insensitively: "Code (Fund)" matches
/// "Code", and an abbreviated header matches a longer canonical name.
/// Blank cells never match; extra unrecognized headers never penalize.
pub fn header_match_score(headers: &[String], canonical: &[&str]) -> f64 {
    if canonical.is_empty() {
        return 0.0;
    }

    let cells: Vec<String> = headers
        .iter()
        .map(|cell| cell.trim().to_lowercase())
        .filter(|cell| !cell.is_empty())
        .collect();

    let found = canonical
        .iter()
        .filter(|column| {
            let column = column.to_lowercase();
            cells.iter().any(|cell| column_matches(cell, &column))
        })
        .count();

    found as f64 / canonical.len() as f64
}

// both sides must already be trimmed and lowercased
pub(crate) fn column_matches(cell: &str, column: &str) -> bool {
    cell.contains(column) || column.contains(cell)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::import::signature::signature_for;

    fn headers(cells: &[&str]) -> Vec<String> {
        cells.iter().map(|cell| cell.to_string()).collect()
    }

    #[test]
    fn own_canonical_columns_score_full() {
        for signature in SIGNATURES {
            for kind in [TemplateKind::Trade, TemplateKind::Holding] {
                let row = headers(signature.columns(kind));
                let score = header_match_score(&row, signature.columns(kind));
                assert_eq!(
                    score, 1.0,
                    "{}/{kind} should match its own template exactly",
                    signature.language
                );
            }
        }
    }

    #[test]
    fn scoring_is_case_insensitive_and_trims() {
        let row = headers(&["  code ", "TRADE TYPE"]);
        let score = header_match_score(&row, &["Code", "Trade Type", "Trade Date"]);
        assert!((score - 2.0 / 3.0).abs() < 1e-9, "unexpected score {score}");
    }

    #[test]
    fn containment_matches_both_directions() {
        let row = headers(&["Code (Fund)", "Shares"]);
        // header superstring of canonical, and canonical superstring of header
        let score = header_match_score(&row, &["Code", "Trade Shares"]);
        assert_eq!(score, 1.0);
    }

    #[test]
    fn blank_cells_never_match() {
        let row = headers(&["", "   ", ""]);
        let score = header_match_score(&row, &["Code", "Name"]);
        assert_eq!(score, 0.0, "blank headers should not match anything");
    }

    #[test]
    fn empty_canonical_list_scores_zero() {
        let row = headers(&["Code"]);
        assert_eq!(header_match_score(&row, &[]), 0.0);
    }

    #[test]
    fn foreign_columns_do_not_raise_a_score() {
        let en = signature_for(Language::En).trade_columns;
        let base = headers(&["Code", "Trade Date"]);
        let base_score = header_match_score(&base, en);

        let mut mixed = base.clone();
        mixed.extend(
            signature_for(Language::Zh)
                .trade_columns
                .iter()
                .map(|column| column.to_string()),
        );
        let mixed_score = header_match_score(&mixed, en);

        assert_eq!(
            mixed_score, base_score,
            "unrelated extra columns should not change the score"
        );
    }

    #[test]
    fn no_rows_detects_default_language() {
        assert_eq!(detect_from_rows(&[], TemplateKind::Trade), Language::En);
        assert_eq!(detect_from_rows(&[], TemplateKind::Holding), Language::En);
    }

    #[test]
    fn unmatched_headers_detect_default_language() {
        let rows = vec![headers(&["alpha", "beta", "gamma"])];
        assert_eq!(detect_from_rows(&rows, TemplateKind::Trade), Language::En);
    }

    #[test]
    fn detection_ignores_data_rows() {
        let rows = vec![
            headers(&["持仓代码", "交易类型", "交易日期"]),
            headers(&["Code", "Trade Type", "Trade Date"]),
        ];
        assert_eq!(
            detect_from_rows(&rows, TemplateKind::Trade),
            Language::Zh,
            "only row 0 should drive detection"
        );
    }
}
