use crate::chemistry::constants::{MASS_C12, MASS_H1, MASS_N14};
use crate::chemistry::nucleotide::{nucleotide_molar_masses, Nucleotide};
use crate::data::config::{Quantity, RatioConfig};
use crate::data::record::{DerivedRecord, PairSum};
use crate::error::{RatioError, RatioResult};

fn checked_divisor(name: &str, value: f64) -> RatioResult<f64> {
    if value == 0.0 || !value.is_finite() {
        return Err(RatioError::InvalidConstant {
            name: name.to_string(),
            value,
        });
    }
    Ok(value)
}

/// Derive all configured column values for a single nucleotide.
///
/// Arguments:
///
/// * `nucleotide` - the base the record belongs to.
/// * `molar_mass` - its molar mass in g/mol, positive and finite.
/// * `config` - conversion factors and the ordered column set.
///
/// Returns:
///
/// * `RatioResult<DerivedRecord>` - one value per configured column, in
///   column order.
///
/// # Example
///
/// ```
/// use ntmass::algorithm::ratio::derive_record;
/// use ntmass::chemistry::nucleotide::Nucleotide;
/// use ntmass::data::config::RatioConfig;
///
/// let config = RatioConfig::codata();
/// let record = derive_record(Nucleotide::A, 331.22, &config).unwrap();
/// let gev = record.get("GeV").unwrap();
/// assert!((gev - 308.5295).abs() < 0.01);
/// ```
pub fn derive_record(
    nucleotide: Nucleotide,
    molar_mass: f64,
    config: &RatioConfig,
) -> RatioResult<DerivedRecord> {
    if !molar_mass.is_finite() || molar_mass <= 0.0 {
        return Err(RatioError::InvalidMass {
            nucleotide,
            value: molar_mass,
        });
    }

    let energy_mass = molar_mass * config.amu_to_gev;
    let mut values = Vec::with_capacity(config.columns.len());
    for column in &config.columns {
        let value = match column.quantity {
            Quantity::MolarMass => molar_mass,
            Quantity::EnergyMass => energy_mass,
            Quantity::KilogramMass => {
                (molar_mass / 1000.0) / checked_divisor("Avogadro", config.avogadro)?
            }
            Quantity::Ratio { reference } => {
                energy_mass / checked_divisor(&column.name, reference)?
            }
        };
        values.push((column.name.clone(), value));
    }
    Ok(DerivedRecord::new(nucleotide, values))
}

/// Derive records for all four nucleotides from the built-in molar-mass
/// table, in canonical A, C, G, T order.
///
/// # Example
///
/// ```
/// use ntmass::algorithm::ratio::derive_all;
/// use ntmass::data::config::RatioConfig;
///
/// let records = derive_all(&RatioConfig::codata()).unwrap();
/// assert_eq!(records.len(), 4);
/// assert_eq!(records[0].nucleotide.symbol(), "A");
/// ```
pub fn derive_all(config: &RatioConfig) -> RatioResult<Vec<DerivedRecord>> {
    let masses = nucleotide_molar_masses();
    Nucleotide::ALL
        .iter()
        .map(|nt| derive_record(*nt, masses[nt], config))
        .collect()
}

fn record_value(records: &[DerivedRecord], nucleotide: Nucleotide, column: &str) -> RatioResult<f64> {
    records
        .iter()
        .find(|r| r.nucleotide == nucleotide)
        .and_then(|r| r.get(column))
        .ok_or_else(|| RatioError::MissingColumn(column.to_string()))
}

/// Sum each requested column over the {A,T} and {C,G} pairs and take the
/// difference of the two sums.
///
/// Arguments:
///
/// * `records` - the four derived records.
/// * `column_names` - columns to aggregate; each must be present in every
///   record.
///
/// Returns:
///
/// * `RatioResult<Vec<PairSum>>` - one aggregate per requested column, in
///   request order.
///
/// # Example
///
/// ```
/// use ntmass::algorithm::ratio::{derive_all, pair_sums};
/// use ntmass::data::config::RatioConfig;
///
/// let records = derive_all(&RatioConfig::codata()).unwrap();
/// let sums = pair_sums(&records, &["Molar".to_string()]).unwrap();
/// assert!((sums[0].sum_at - 653.43).abs() < 1e-9);
/// assert!((sums[0].sum_cg - 654.42).abs() < 1e-9);
/// assert!((sums[0].difference - 0.99).abs() < 1e-6);
/// ```
pub fn pair_sums(records: &[DerivedRecord], column_names: &[String]) -> RatioResult<Vec<PairSum>> {
    let mut sums = Vec::with_capacity(column_names.len());
    for column in column_names {
        let sum_at = record_value(records, Nucleotide::A, column)?
            + record_value(records, Nucleotide::T, column)?;
        let sum_cg = record_value(records, Nucleotide::C, column)?
            + record_value(records, Nucleotide::G, column)?;
        sums.push(PairSum {
            column: column.clone(),
            sum_at,
            sum_cg,
            difference: sum_cg - sum_at,
        });
    }
    Ok(sums)
}

/// Atomic-mass difference N14 - C12 - H1 in amu. Swapping an A:T base pair
/// for G:C exchanges one C-H group for a ring nitrogen, so the molar-mass
/// pair difference lands near this value.
///
/// # Example
///
/// ```
/// use ntmass::algorithm::ratio::composition_difference;
///
/// assert!((composition_difference() - 0.99525).abs() < 1e-4);
/// ```
pub fn composition_difference() -> f64 {
    MASS_N14 - MASS_C12 - MASS_H1
}
