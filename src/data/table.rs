use std::iter::once;

use itertools::Itertools;

use crate::algorithm::ratio::composition_difference;
use crate::data::config::{ColumnSpec, NumberFormat};
use crate::data::record::{DerivedRecord, PairSum};
use crate::error::{RatioError, RatioResult};

const SYMBOL_WIDTH: usize = 3;
const SUMMARY_WIDTH: usize = 12;

fn column_format(columns: &[ColumnSpec], name: &str) -> RatioResult<NumberFormat> {
    columns
        .iter()
        .find(|c| c.name == name)
        .map(|c| c.format)
        .ok_or_else(|| RatioError::MissingColumn(name.to_string()))
}

/// Render the per-nucleotide table: a right-aligned header, a dash rule
/// sized to the header, and one row per record. An empty column set yields
/// the header-only table with no data rows.
///
/// Arguments:
///
/// * `records` - derived records, printed in slice order.
/// * `columns` - column layout; every name must exist in every record.
///
/// Returns:
///
/// * `RatioResult<String>` - the rendered table, one trailing newline per line.
///
/// # Example
///
/// ```
/// use ntmass::algorithm::ratio::derive_all;
/// use ntmass::data::config::RatioConfig;
/// use ntmass::data::table::render_table;
///
/// let config = RatioConfig::codata();
/// let records = derive_all(&config).unwrap();
/// let table = render_table(&records, &config.columns).unwrap();
/// assert_eq!(table.lines().count(), 6);
/// assert!(table.contains("Molar (g/mol)"));
/// assert!(table.contains("331.22"));
/// ```
pub fn render_table(records: &[DerivedRecord], columns: &[ColumnSpec]) -> RatioResult<String> {
    let header = once(format!("{:>w$}", "NT", w = SYMBOL_WIDTH))
        .chain(columns.iter().map(|c| format!("{:>w$}", c.label, w = c.width)))
        .join(" | ");

    let mut out = String::new();
    out.push_str(&header);
    out.push('\n');
    out.push_str(&"-".repeat(header.chars().count()));
    out.push('\n');

    if columns.is_empty() {
        return Ok(out);
    }

    for record in records {
        let cells = columns
            .iter()
            .map(|c| {
                let value = record
                    .get(&c.name)
                    .ok_or_else(|| RatioError::MissingColumn(c.name.clone()))?;
                Ok(c.format.render(value, c.width, 2))
            })
            .collect::<RatioResult<Vec<String>>>()?;
        let row = once(format!("{:>w$}", record.nucleotide.symbol(), w = SYMBOL_WIDTH))
            .chain(cells)
            .join(" | ");
        out.push_str(&row);
        out.push('\n');
    }
    Ok(out)
}

/// Render the pair-sum table: one row per aggregated column with the
/// {A,T} sum, the {C,G} sum and their difference at four decimal places.
///
/// # Example
///
/// ```
/// use ntmass::algorithm::ratio::{derive_all, pair_sums};
/// use ntmass::data::config::RatioConfig;
/// use ntmass::data::table::render_pair_summary;
///
/// let config = RatioConfig::codata();
/// let records = derive_all(&config).unwrap();
/// let sums = pair_sums(&records, &["Molar".to_string()]).unwrap();
/// let summary = render_pair_summary(&sums, &config.columns).unwrap();
/// assert!(summary.contains("653.4300"));
/// assert!(summary.contains("654.4200"));
/// ```
pub fn render_pair_summary(sums: &[PairSum], columns: &[ColumnSpec]) -> RatioResult<String> {
    let header = format!(
        "{:>10} | {:>w$} | {:>w$} | {:>w$}",
        "Column",
        "A+T",
        "C+G",
        "Difference",
        w = SUMMARY_WIDTH
    );

    let mut out = String::new();
    out.push_str(&header);
    out.push('\n');
    out.push_str(&"-".repeat(header.chars().count()));
    out.push('\n');

    for sum in sums {
        let format = column_format(columns, &sum.column)?;
        out.push_str(&format!(
            "{:>10} | {} | {} | {}\n",
            sum.column,
            format.render(sum.sum_at, SUMMARY_WIDTH, 4),
            format.render(sum.sum_cg, SUMMARY_WIDTH, 4),
            format.render(sum.difference, SUMMARY_WIDTH, 4),
        ));
    }
    Ok(out)
}

/// Render the explicit equation listing: per column, (A+T)+1 against C+G
/// and (C+G)-1 against A+T, each with its residual.
pub fn render_equation_check(sums: &[PairSum]) -> String {
    let mut out = String::new();
    out.push_str("Verification of equations:\n");
    out.push_str("  (1) C + G = A + T + 1\n");
    out.push_str("  (2) A + T = C + G - 1\n\n");
    for sum in sums {
        let at_plus_one = sum.sum_at + 1.0;
        let cg_minus_one = sum.sum_cg - 1.0;
        out.push_str(&format!("{:>10}:\n", sum.column));
        out.push_str(&format!(
            "    (A+T)+1 = {:12.4}    vs.    C+G = {:12.4}   (diff = {:8.4})\n",
            at_plus_one,
            sum.sum_cg,
            sum.sum_cg - at_plus_one,
        ));
        out.push_str(&format!(
            "    (C+G)-1 = {:12.4}    vs.    A+T = {:12.4}   (diff = {:8.4})\n\n",
            cg_minus_one,
            sum.sum_at,
            sum.sum_at - cg_minus_one,
        ));
    }
    out
}

/// Render the composition check: the observed C+G - (A+T) molar-mass
/// difference next to the N14 - C12 - H1 atomic-mass difference that
/// accounts for it.
///
/// # Example
///
/// ```
/// use ntmass::algorithm::ratio::{derive_all, pair_sums};
/// use ntmass::data::config::RatioConfig;
/// use ntmass::data::table::render_composition_check;
///
/// let config = RatioConfig::codata();
/// let records = derive_all(&config).unwrap();
/// let sums = pair_sums(&records, &["Molar".to_string()]).unwrap();
/// let check = render_composition_check(&sums).unwrap();
/// assert!(check.contains("N14 - C12 - H1"));
/// ```
pub fn render_composition_check(sums: &[PairSum]) -> RatioResult<String> {
    let molar = sums
        .iter()
        .find(|s| s.column == "Molar")
        .ok_or_else(|| RatioError::MissingColumn("Molar".to_string()))?;
    let expected = composition_difference();
    let residual = molar.difference - expected;

    let mut out = String::new();
    out.push_str("--- Composition Check (Molar) ---\n");
    out.push_str(&format!("C+G - (A+T)    = {:12.4}\n", molar.difference));
    out.push_str(&format!("N14 - C12 - H1 = {:12.4}\n", expected));
    out.push_str(&format!("residual       = {:12.4}\n", residual));
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithm::ratio::{derive_all, pair_sums};
    use crate::data::config::RatioConfig;

    #[test]
    fn test_rule_matches_header_length() {
        let config = RatioConfig::codata();
        let records = derive_all(&config).unwrap();
        let table = render_table(&records, &config.columns).unwrap();
        let mut lines = table.lines();
        let header = lines.next().unwrap();
        let rule = lines.next().unwrap();
        assert_eq!(header.chars().count(), rule.chars().count());
        assert!(rule.chars().all(|c| c == '-'));
    }

    #[test]
    fn test_empty_column_set_renders_header_only() {
        let config = RatioConfig::codata();
        let records = derive_all(&config).unwrap();
        let table = render_table(&records, &[]).unwrap();
        assert_eq!(table.lines().count(), 2);
        assert!(table.starts_with(" NT\n"));
    }

    #[test]
    fn test_rows_follow_canonical_order() {
        let config = RatioConfig::minimal();
        let records = derive_all(&config).unwrap();
        let table = render_table(&records, &config.columns).unwrap();
        let symbols: Vec<&str> = table
            .lines()
            .skip(2)
            .map(|line| line.split(" | ").next().unwrap().trim())
            .collect();
        assert_eq!(symbols, vec!["A", "C", "G", "T"]);
    }

    #[test]
    fn test_unknown_column_in_layout_is_rejected() {
        let config = RatioConfig::codata();
        let records = derive_all(&config).unwrap();
        let layout = RatioConfig::minimal().columns;
        let reduced = render_table(&records, &layout);
        // codata records carry every minimal column, so this succeeds
        assert!(reduced.is_ok());

        let minimal_records = derive_all(&RatioConfig::minimal()).unwrap();
        let err = render_table(&minimal_records, &RatioConfig::codata().columns).unwrap_err();
        assert_eq!(err, RatioError::MissingColumn("Kg".to_string()));
    }

    #[test]
    fn test_pair_summary_formats_by_column_style() {
        let config = RatioConfig::codata();
        let records = derive_all(&config).unwrap();
        let sums = pair_sums(&records, &["Molar".to_string(), "Kg".to_string()]).unwrap();
        let summary = render_pair_summary(&sums, &config.columns).unwrap();
        assert!(summary.contains("653.4300"));
        // kilogram sums stay in scientific notation instead of rounding to zero
        assert!(summary.contains("e-24") || summary.contains("e-25"));
    }

    #[test]
    fn test_pair_summary_unknown_column_is_rejected() {
        let sums = vec![PairSum {
            column: "Muon".to_string(),
            sum_at: 0.0,
            sum_cg: 0.0,
            difference: 0.0,
        }];
        let err = render_pair_summary(&sums, &RatioConfig::codata().columns).unwrap_err();
        assert_eq!(err, RatioError::MissingColumn("Muon".to_string()));
    }

    #[test]
    fn test_equation_check_lists_every_column() {
        let config = RatioConfig::minimal();
        let records = derive_all(&config).unwrap();
        let sums = pair_sums(&records, &config.column_names()).unwrap();
        let listing = render_equation_check(&sums);
        for name in config.column_names() {
            assert!(listing.contains(&format!("{:>10}:", name)));
        }
        assert!(listing.contains("654.4300"));
    }

    #[test]
    fn test_composition_check_residual_is_small() {
        let config = RatioConfig::codata();
        let records = derive_all(&config).unwrap();
        let sums = pair_sums(&records, &["Molar".to_string()]).unwrap();
        let check = render_composition_check(&sums).unwrap();
        assert!(check.contains("0.9900"));
        assert!(check.contains("0.9952"));
    }

    #[test]
    fn test_composition_check_requires_molar_column() {
        let err = render_composition_check(&[]).unwrap_err();
        assert_eq!(err, RatioError::MissingColumn("Molar".to_string()));
    }
}
