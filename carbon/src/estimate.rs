//! Annual CO2 estimate per tree (`formula_v1`).
//!
//! `annual_co2 = species_rate × age_factor × height_factor`, worth
//! `annual_co2 × 0.1` Tredits. Both figures are rounded to two decimals.

use crate::error::CarbonError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Name of the estimation method recorded alongside each estimate.
pub const METHOD_FORMULA_V1: &str = "formula_v1";

/// Tredits per kg of CO2 (1 Tredit per 10 kg).
pub const TREDITS_PER_KG_CO2: f64 = 0.1;

/// Species with a known absorption rate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Species {
    /// Average tree; used for unknown or missing species.
    Default,
    Oak,
    Pine,
    Maple,
    Banyan,
    Neem,
    Eucalyptus,
}

impl Species {
    pub const ALL: [Species; 7] = [
        Species::Default,
        Species::Oak,
        Species::Pine,
        Species::Maple,
        Species::Banyan,
        Species::Neem,
        Species::Eucalyptus,
    ];

    /// Case-insensitive lookup; anything unrecognised maps to `Default`.
    pub fn lookup(name: &str) -> Self {
        let name = name.trim();
        Self::ALL
            .into_iter()
            .find(|s| s.as_str().eq_ignore_ascii_case(name))
            .unwrap_or(Species::Default)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Species::Default => "default",
            Species::Oak => "oak",
            Species::Pine => "pine",
            Species::Maple => "maple",
            Species::Banyan => "banyan",
            Species::Neem => "neem",
            Species::Eucalyptus => "eucalyptus",
        }
    }

    /// kg of CO2 absorbed per year by a mature specimen.
    pub fn annual_rate_kg(&self) -> f64 {
        match self {
            Species::Default => 21.77,
            Species::Oak => 25.0,
            Species::Pine => 18.5,
            Species::Maple => 22.0,
            Species::Banyan => 35.0,
            Species::Neem => 28.0,
            Species::Eucalyptus => 20.0,
        }
    }
}

impl fmt::Display for Species {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What is known about a tree when estimating. Absent or zero measurements
/// leave the corresponding factor at 1.0.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TreeMeasurements {
    #[serde(default)]
    pub species: Option<String>,
    #[serde(default)]
    pub age_months: Option<u32>,
    #[serde(default)]
    pub height_cm: Option<f64>,
}

/// Result of a carbon estimate.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CarbonEstimate {
    pub species: Species,
    pub annual_co2_kg: f64,
    pub tredits_value: f64,
    pub method: String,
}

/// Younger trees absorb less; old trees more.
pub fn age_factor(age_months: Option<u32>) -> f64 {
    match age_months {
        None | Some(0) => 1.0,
        Some(m) if m < 12 => 0.5,
        Some(m) if m < 36 => 0.8,
        Some(m) if m > 60 => 1.2,
        Some(_) => 1.0,
    }
}

/// Taller trees absorb more.
pub fn height_factor(height_cm: Option<f64>) -> Result<f64, CarbonError> {
    match height_cm {
        None => Ok(1.0),
        Some(h) if !h.is_finite() || h < 0.0 => Err(CarbonError::InvalidMeasurement {
            field: "height_cm",
            value: h.to_string(),
        }),
        Some(h) if h > 300.0 => Ok(1.3),
        Some(h) if h > 150.0 => Ok(1.1),
        Some(_) => Ok(1.0),
    }
}

/// Estimate annual CO2 absorption and its Tredit value.
pub fn estimate(measurements: &TreeMeasurements) -> Result<CarbonEstimate, CarbonError> {
    let species = measurements
        .species
        .as_deref()
        .map(Species::lookup)
        .unwrap_or(Species::Default);

    let annual_co2 = species.annual_rate_kg()
        * age_factor(measurements.age_months)
        * height_factor(measurements.height_cm)?;

    let estimate = CarbonEstimate {
        species,
        annual_co2_kg: round2(annual_co2),
        tredits_value: round2(annual_co2 * TREDITS_PER_KG_CO2),
        method: METHOD_FORMULA_V1.to_string(),
    };
    tracing::debug!(
        species = %estimate.species,
        annual_co2_kg = estimate.annual_co2_kg,
        tredits_value = estimate.tredits_value,
        "carbon estimate"
    );
    Ok(estimate)
}

pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn measure(
        species: Option<&str>,
        age_months: Option<u32>,
        height_cm: Option<f64>,
    ) -> TreeMeasurements {
        TreeMeasurements {
            species: species.map(str::to_string),
            age_months,
            height_cm,
        }
    }

    #[test]
    fn species_lookup_is_case_insensitive() {
        assert_eq!(Species::lookup("OAK"), Species::Oak);
        assert_eq!(Species::lookup(" Neem "), Species::Neem);
        assert_eq!(Species::lookup("baobab"), Species::Default);
        assert_eq!(Species::lookup(""), Species::Default);
    }

    #[test]
    fn plain_default_tree() {
        let e = estimate(&TreeMeasurements::default()).unwrap();
        assert_eq!(e.species, Species::Default);
        assert_eq!(e.annual_co2_kg, 21.77);
        assert_eq!(e.tredits_value, 2.18);
        assert_eq!(e.method, "formula_v1");
    }

    #[test]
    fn young_medium_oak() {
        let e = estimate(&measure(Some("oak"), Some(24), Some(200.0))).unwrap();
        assert_eq!(e.annual_co2_kg, 22.0);
        assert_eq!(e.tredits_value, 2.2);
    }

    #[test]
    fn old_tall_banyan() {
        let e = estimate(&measure(Some("Banyan"), Some(72), Some(450.0))).unwrap();
        assert_eq!(e.annual_co2_kg, 54.6);
        assert_eq!(e.tredits_value, 5.46);
    }

    #[test]
    fn age_bands() {
        assert_eq!(age_factor(None), 1.0);
        assert_eq!(age_factor(Some(0)), 1.0);
        assert_eq!(age_factor(Some(11)), 0.5);
        assert_eq!(age_factor(Some(12)), 0.8);
        assert_eq!(age_factor(Some(35)), 0.8);
        assert_eq!(age_factor(Some(36)), 1.0);
        assert_eq!(age_factor(Some(60)), 1.0);
        assert_eq!(age_factor(Some(61)), 1.2);
    }

    #[test]
    fn height_bands() {
        assert_eq!(height_factor(None).unwrap(), 1.0);
        assert_eq!(height_factor(Some(0.0)).unwrap(), 1.0);
        assert_eq!(height_factor(Some(150.0)).unwrap(), 1.0);
        assert_eq!(height_factor(Some(150.5)).unwrap(), 1.1);
        assert_eq!(height_factor(Some(300.0)).unwrap(), 1.1);
        assert_eq!(height_factor(Some(301.0)).unwrap(), 1.3);
    }

    #[test]
    fn bad_height_is_rejected() {
        for h in [-1.0, f64::NAN, f64::INFINITY] {
            let err = estimate(&measure(None, None, Some(h))).unwrap_err();
            assert!(matches!(err, CarbonError::InvalidMeasurement { field: "height_cm", .. }));
        }
    }
}
