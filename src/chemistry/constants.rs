// Purpose: To store conversion factors and reference masses used across the crate
pub const AMU_TO_GEV: f64 = 0.93149410242; // GeV per unified atomic mass unit (CODATA 2022)
pub const MASS_PROTON_GEV: f64 = 0.93827208816; // GeV
pub const MASS_NEUTRON_GEV: f64 = 0.93956542052; // GeV
pub const MASS_ELECTRON_GEV: f64 = 0.00051099895000; // GeV
pub const MASS_PLANCK_KG: f64 = 2.176434e-8; // kilograms
pub const MASS_PLANCK_GEV: f64 = 1.2209e19; // GeV

// Figures carried over from the legacy ratio tables, not authoritative
pub const FERMI_SCALE_GEV: f64 = 2.8e6; // GeV
pub const NEURON_MASS_GEV: f64 = 1.0e-10; // GeV, placeholder

pub const AVOGADRO: f64 = 6.02214076e23; // mol^-1

// Atomic masses in unified atomic mass units
pub const MASS_N14: f64 = 14.00307400443;
pub const MASS_C12: f64 = 12.0;
pub const MASS_H1: f64 = 1.00782503224;

// Coarse constants used by the reduced column set
pub const AMU_TO_GEV_COARSE: f64 = 0.9315;
pub const MASS_PROTON_GEV_COARSE: f64 = 0.9382720813;
pub const MASS_ELECTRON_GEV_COARSE: f64 = 0.000511;
