use serde::{Deserialize, Serialize};

use crate::chemistry::constants::{
    AMU_TO_GEV, AMU_TO_GEV_COARSE, AVOGADRO, FERMI_SCALE_GEV, MASS_ELECTRON_GEV,
    MASS_ELECTRON_GEV_COARSE, MASS_NEUTRON_GEV, MASS_PLANCK_GEV, MASS_PLANCK_KG, MASS_PROTON_GEV,
    MASS_PROTON_GEV_COARSE, NEURON_MASS_GEV,
};

/// How a column's values are written into a rendered table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum NumberFormat {
    Fixed,
    Scientific,
}

impl NumberFormat {
    /// Format a value right-aligned to `width` with `precision` decimal places.
    ///
    /// # Example
    ///
    /// ```
    /// use ntmass::data::config::NumberFormat;
    ///
    /// assert_eq!(NumberFormat::Fixed.render(331.22, 10, 2), "    331.22");
    /// assert_eq!(NumberFormat::Scientific.render(5.5e-25, 12, 2), "    5.50e-25");
    /// ```
    pub fn render(&self, value: f64, width: usize, precision: usize) -> String {
        match self {
            NumberFormat::Fixed => format!("{:>w$.p$}", value, w = width, p = precision),
            NumberFormat::Scientific => format!("{:>w$.p$e}", value, w = width, p = precision),
        }
    }
}

/// The derived quantity a column holds.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum Quantity {
    /// Molar mass in g/mol, passed through unchanged.
    MolarMass,
    /// Molar mass converted to GeV via the amu-to-GeV factor.
    EnergyMass,
    /// Per-particle mass in kilograms via Avogadro's number.
    KilogramMass,
    /// Energy mass divided by a reference constant in GeV.
    Ratio { reference: f64 },
}

/// One column of the ratio table: its key, header label, layout and quantity.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ColumnSpec {
    pub name: String,
    pub label: String,
    pub width: usize,
    pub format: NumberFormat,
    pub quantity: Quantity,
}

impl ColumnSpec {
    pub fn new(
        name: &str,
        label: &str,
        width: usize,
        format: NumberFormat,
        quantity: Quantity,
    ) -> Self {
        ColumnSpec {
            name: name.to_string(),
            label: label.to_string(),
            width,
            format,
            quantity,
        }
    }
}

/// Immutable inputs for one ratio-table run: conversion factors plus the
/// ordered column set. Constructed explicitly and passed into the
/// computation functions, never read from ambient state.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RatioConfig {
    pub amu_to_gev: f64,
    pub avogadro: f64,
    pub columns: Vec<ColumnSpec>,
}

impl RatioConfig {
    /// Full CODATA-2022 column set: molar mass, GeV mass, kilogram mass and
    /// ratios against proton, neutron, electron, Planck, Fermi-scale and
    /// placeholder neuron masses. The Planck divisor keeps the historical
    /// kilogram-figure-over-conversion-factor form; Fermi and neuron values
    /// are table inputs, not authoritative constants.
    ///
    /// # Example
    ///
    /// ```
    /// use ntmass::data::config::RatioConfig;
    ///
    /// let config = RatioConfig::codata();
    /// assert_eq!(config.columns.len(), 9);
    /// assert_eq!(config.columns[0].name, "Molar");
    /// ```
    pub fn codata() -> Self {
        use NumberFormat::{Fixed, Scientific};
        RatioConfig {
            amu_to_gev: AMU_TO_GEV,
            avogadro: AVOGADRO,
            columns: vec![
                ColumnSpec::new("Molar", "Molar (g/mol)", 14, Fixed, Quantity::MolarMass),
                ColumnSpec::new("GeV", "Mass (GeV)", 10, Fixed, Quantity::EnergyMass),
                ColumnSpec::new("Kg", "Mass (Kg)", 12, Scientific, Quantity::KilogramMass),
                ColumnSpec::new(
                    "Proton",
                    "Proton Ratio",
                    14,
                    Fixed,
                    Quantity::Ratio { reference: MASS_PROTON_GEV },
                ),
                ColumnSpec::new(
                    "Neutron",
                    "Neutron Ratio",
                    14,
                    Fixed,
                    Quantity::Ratio { reference: MASS_NEUTRON_GEV },
                ),
                ColumnSpec::new(
                    "Electron",
                    "Electron Ratio",
                    16,
                    Scientific,
                    Quantity::Ratio { reference: MASS_ELECTRON_GEV },
                ),
                ColumnSpec::new(
                    "Planck",
                    "Planck Ratio",
                    14,
                    Scientific,
                    Quantity::Ratio { reference: MASS_PLANCK_KG / AMU_TO_GEV },
                ),
                ColumnSpec::new(
                    "Fermi",
                    "Fermi Ratio",
                    14,
                    Scientific,
                    Quantity::Ratio { reference: FERMI_SCALE_GEV },
                ),
                ColumnSpec::new(
                    "Neuron",
                    "Neuron Ratio",
                    14,
                    Scientific,
                    Quantity::Ratio { reference: NEURON_MASS_GEV },
                ),
            ],
        }
    }

    /// Reduced legacy column set with coarse conversion factors and the
    /// physical Planck mass in GeV.
    ///
    /// # Example
    ///
    /// ```
    /// use ntmass::data::config::RatioConfig;
    ///
    /// let config = RatioConfig::minimal();
    /// assert_eq!(config.columns.len(), 5);
    /// ```
    pub fn minimal() -> Self {
        use NumberFormat::{Fixed, Scientific};
        RatioConfig {
            amu_to_gev: AMU_TO_GEV_COARSE,
            avogadro: AVOGADRO,
            columns: vec![
                ColumnSpec::new("Molar", "Molar (g/mol)", 14, Fixed, Quantity::MolarMass),
                ColumnSpec::new("GeV", "Mass (GeV)", 10, Fixed, Quantity::EnergyMass),
                ColumnSpec::new(
                    "Proton",
                    "Proton Ratio",
                    14,
                    Fixed,
                    Quantity::Ratio { reference: MASS_PROTON_GEV_COARSE },
                ),
                ColumnSpec::new(
                    "Electron",
                    "Electron Ratio",
                    16,
                    Scientific,
                    Quantity::Ratio { reference: MASS_ELECTRON_GEV_COARSE },
                ),
                ColumnSpec::new(
                    "Planck",
                    "Planck Ratio",
                    14,
                    Scientific,
                    Quantity::Ratio { reference: MASS_PLANCK_GEV },
                ),
            ],
        }
    }

    /// Column keys in table order.
    pub fn column_names(&self) -> Vec<String> {
        self.columns.iter().map(|c| c.name.clone()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codata_column_order() {
        let config = RatioConfig::codata();
        let names = config.column_names();
        assert_eq!(
            names,
            vec!["Molar", "GeV", "Kg", "Proton", "Neutron", "Electron", "Planck", "Fermi", "Neuron"]
        );
    }

    #[test]
    fn test_minimal_uses_physical_planck_mass() {
        let config = RatioConfig::minimal();
        let planck = config.columns.iter().find(|c| c.name == "Planck").unwrap();
        match planck.quantity {
            Quantity::Ratio { reference } => assert_eq!(reference, MASS_PLANCK_GEV),
            _ => panic!("Planck column must be a ratio"),
        }
    }

    #[test]
    fn test_fixed_render_pads_to_width() {
        let cell = NumberFormat::Fixed.render(0.99, 12, 4);
        assert_eq!(cell.len(), 12);
        assert!(cell.ends_with("0.9900"));
    }
}
