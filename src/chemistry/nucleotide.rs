use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the four DNA deoxyribonucleotides, identified by its base.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Nucleotide {
    A,
    C,
    G,
    T,
}

impl Nucleotide {
    /// Canonical iteration and display order.
    pub const ALL: [Nucleotide; 4] = [Nucleotide::A, Nucleotide::C, Nucleotide::G, Nucleotide::T];

    /// One-letter base symbol.
    ///
    /// # Example
    ///
    /// ```
    /// use ntmass::chemistry::nucleotide::Nucleotide;
    ///
    /// assert_eq!(Nucleotide::G.symbol(), "G");
    /// ```
    pub fn symbol(&self) -> &'static str {
        match self {
            Nucleotide::A => "A",
            Nucleotide::C => "C",
            Nucleotide::G => "G",
            Nucleotide::T => "T",
        }
    }

    /// Name of the corresponding deoxyribonucleotide monophosphate.
    ///
    /// # Example
    ///
    /// ```
    /// use ntmass::chemistry::nucleotide::Nucleotide;
    ///
    /// assert_eq!(Nucleotide::A.monophosphate(), "dAMP");
    /// ```
    pub fn monophosphate(&self) -> &'static str {
        match self {
            Nucleotide::A => "dAMP",
            Nucleotide::C => "dCMP",
            Nucleotide::G => "dGMP",
            Nucleotide::T => "dTMP",
        }
    }
}

impl fmt::Display for Nucleotide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Approximate molar masses (g/mol) of the deoxyribonucleotide monophosphates.
///
/// Returns:
///
/// * `HashMap<Nucleotide, f64>` - molar mass in grams per mole, keyed by base.
///
/// # Example
///
/// ```
/// use ntmass::chemistry::nucleotide::{nucleotide_molar_masses, Nucleotide};
///
/// let masses = nucleotide_molar_masses();
/// assert_eq!(masses[&Nucleotide::A], 331.22);
/// assert_eq!(masses.len(), 4);
/// ```
pub fn nucleotide_molar_masses() -> HashMap<Nucleotide, f64> {
    let mut map = HashMap::new();
    map.insert(Nucleotide::A, 331.22);
    map.insert(Nucleotide::C, 307.20);
    map.insert(Nucleotide::G, 347.22);
    map.insert(Nucleotide::T, 322.21);
    map
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_molar_mass_table_covers_all_bases() {
        let masses = nucleotide_molar_masses();
        assert_eq!(masses.len(), 4);
        for nt in Nucleotide::ALL {
            assert!(masses[&nt] > 0.0);
        }
    }

    #[test]
    fn test_gc_pair_outweighs_at_pair_by_about_one() {
        let masses = nucleotide_molar_masses();
        let at = masses[&Nucleotide::A] + masses[&Nucleotide::T];
        let cg = masses[&Nucleotide::C] + masses[&Nucleotide::G];
        assert!((cg - at - 0.99).abs() < 1e-9);
    }
}
