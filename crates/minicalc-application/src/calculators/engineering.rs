//! Electrical and hardware estimators: transformer core area, cable core
//! size and a relative CPU score.
//!
//! Each returns its figure formatted to two decimals, `"0.00"` for any
//! non-positive input (which is also left out of the history).

use minicalc_core::history::CalculationKind;
use strum::{AsRefStr, Display, EnumIter, EnumString};

use super::{Evaluated, fixed2};

/// Peak flux density for silicon steel, in tesla.
pub const FLUX_DENSITY: f64 = 1.2;
/// Lamination stacking factor.
pub const STACKING_FACTOR: f64 = 0.95;

/// Conductor material of a cable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, AsRefStr, EnumString, EnumIter)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Material {
    #[default]
    Copper,
    Aluminum,
}

impl Material {
    /// Resistivity in Ω·mm²/m.
    pub fn resistivity(self) -> f64 {
        match self {
            Material::Copper => 0.0172,
            Material::Aluminum => 0.0282,
        }
    }
}

/// Core cross-section in cm² for a primary `voltage` at `frequency` Hz.
pub fn transformer_core_area(voltage: f64, frequency: f64) -> Evaluated<String> {
    if voltage <= 0.0 || frequency <= 0.0 {
        return Evaluated::unrecorded(fixed2(0.0));
    }

    let area_m2 = voltage / (4.44 * frequency * FLUX_DENSITY * STACKING_FACTOR);
    let area = fixed2(area_m2 * 10_000.0);
    let entry = CalculationKind::TransformerCoreArea.entry(format!("Required Area: {area} cm²"));
    Evaluated::recorded(area, entry)
}

#[derive(Debug, Clone, PartialEq)]
pub struct CableInput {
    pub current: f64,
    pub length: f64,
    pub voltage: f64,
    pub drop_percent: f64,
    pub material: Material,
}

/// Conductor cross-section in mm² that keeps the voltage drop within
/// `drop_percent` of the supply voltage.
pub fn cable_core_size(input: &CableInput) -> Evaluated<String> {
    if input.current <= 0.0
        || input.length <= 0.0
        || input.voltage <= 0.0
        || input.drop_percent <= 0.0
    {
        return Evaluated::unrecorded(fixed2(0.0));
    }

    let allowed_drop = input.voltage * (input.drop_percent / 100.0);
    let size = fixed2(input.material.resistivity() * input.length * input.current / allowed_drop);
    let entry = CalculationKind::CableCoreSize.entry(format!(
        "Required Size: {size} mm² for {}",
        input.material
    ));
    Evaluated::recorded(size, entry)
}

/// Relative score: cores × clock (GHz) × instructions per cycle.
pub fn cpu_performance(cores: i64, clock_ghz: f64, ipc: f64) -> Evaluated<String> {
    if cores <= 0 || clock_ghz <= 0.0 || ipc <= 0.0 {
        return Evaluated::unrecorded(fixed2(0.0));
    }

    let score = fixed2(cores as f64 * clock_ghz * ipc);
    let entry = CalculationKind::CpuPerformance.entry(format!("Relative Score: {score}"));
    Evaluated::recorded(score, entry)
}
