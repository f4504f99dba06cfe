use serde::{Deserialize, Serialize};

use crate::chemistry::nucleotide::Nucleotide;

/// Derived quantities for one nucleotide, keyed by column name in the
/// order the columns were configured. Never mutated after construction.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DerivedRecord {
    pub nucleotide: Nucleotide,
    values: Vec<(String, f64)>,
}

impl DerivedRecord {
    pub fn new(nucleotide: Nucleotide, values: Vec<(String, f64)>) -> Self {
        DerivedRecord { nucleotide, values }
    }

    /// Look up a derived value by column name.
    ///
    /// # Example
    ///
    /// ```
    /// use ntmass::chemistry::nucleotide::Nucleotide;
    /// use ntmass::data::record::DerivedRecord;
    ///
    /// let record = DerivedRecord::new(Nucleotide::A, vec![("Molar".to_string(), 331.22)]);
    /// assert_eq!(record.get("Molar"), Some(331.22));
    /// assert_eq!(record.get("Proton"), None);
    /// ```
    pub fn get(&self, column: &str) -> Option<f64> {
        self.values
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, value)| *value)
    }

    /// Column names in configured order.
    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.values.iter().map(|(name, _)| name.as_str())
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Aggregate of one derived column over the Watson-Crick pairings:
/// the {A,T} sum, the {C,G} sum and their difference.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PairSum {
    pub column: String,
    pub sum_at: f64,
    pub sum_cg: f64,
    pub difference: f64,
}
