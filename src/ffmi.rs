use std::fmt::Display;

use serde::Serialize;
use tracing::debug;

use crate::{
    rounding::round_to,
    unit::{KG_TO_LBS, MeasurementSystem, WeightUnit},
};

pub const MIN_BODY_FAT_PERCENTAGE: f64 = 0.0;
pub const MAX_BODY_FAT_PERCENTAGE: f64 = 100.0;

/// Height adjusted FFMI is normalized to this height.
const NORMALIZED_HEIGHT_METERS: f64 = 1.8;
const HEIGHT_ADJUSTMENT_FACTOR: f64 = 6.1;

/// Weight and height in the units of `system` (kg and cm, or lbs and inches).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FfmiInput {
    pub weight: f64,
    pub height: f64,
    pub body_fat: f64,
    pub system: MeasurementSystem,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum FfmiCategory {
    BelowAverage,
    Average,
    AboveAverage,
    Excellent,
    Superior,
    Enhanced,
}

impl FfmiCategory {
    #[must_use]
    pub fn classify(adjusted_ffmi: f64) -> Self {
        match adjusted_ffmi {
            v if v < 18.0 => FfmiCategory::BelowAverage,
            v if v < 20.0 => FfmiCategory::Average,
            v if v < 22.0 => FfmiCategory::AboveAverage,
            v if v < 24.0 => FfmiCategory::Excellent,
            v if v < 26.0 => FfmiCategory::Superior,
            _ => FfmiCategory::Enhanced,
        }
    }
}

impl Display for FfmiCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FfmiCategory::BelowAverage => write!(f, "Below average"),
            FfmiCategory::Average => write!(f, "Average"),
            FfmiCategory::AboveAverage => write!(f, "Above average"),
            FfmiCategory::Excellent => write!(f, "Excellent"),
            FfmiCategory::Superior => write!(f, "Superior - Natural limit"),
            FfmiCategory::Enhanced => write!(f, "Very likely enhanced (steroid use)"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Ffmi {
    pub ffmi: f64,
    pub adjusted_ffmi: f64,
    /// In the mass unit of the input's measurement system.
    pub fat_free_mass: f64,
    pub category: FfmiCategory,
}

impl Ffmi {
    /// Only the fat-free mass carries a unit; the indices are unitless.
    #[must_use]
    pub fn convert(self, from: MeasurementSystem, to: MeasurementSystem) -> Self {
        if from == to {
            return self;
        }

        let factor = from.weight_unit().factor_to(to.weight_unit());
        Ffmi {
            fat_free_mass: round_to(self.fat_free_mass * factor, 1),
            ..self
        }
    }
}

fn height_meters(height: f64, system: MeasurementSystem) -> f64 {
    system.length_to_cm(height) / 100.0
}

#[must_use]
pub fn ffmi(input: &FfmiInput) -> Ffmi {
    let weight_kg = input.system.mass_to_kg(input.weight);
    let height = height_meters(input.height, input.system);

    let fat_free_mass_kg = weight_kg * (1.0 - input.body_fat / 100.0);
    let raw = fat_free_mass_kg / (height * height);
    let adjusted = raw + HEIGHT_ADJUSTMENT_FACTOR * (NORMALIZED_HEIGHT_METERS - height);

    let fat_free_mass = match input.system.weight_unit() {
        WeightUnit::Kg => fat_free_mass_kg,
        WeightUnit::Lbs => fat_free_mass_kg * KG_TO_LBS,
    };
    let category = FfmiCategory::classify(adjusted);

    debug!(raw, adjusted, fat_free_mass, %category, "calculated ffmi");

    Ffmi {
        ffmi: round_to(raw, 1),
        adjusted_ffmi: round_to(adjusted, 1),
        fat_free_mass: round_to(fat_free_mass, 1),
        category,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn metric_at_reference_height() {
        let result = ffmi(&FfmiInput {
            weight: 80.0,
            height: 180.0,
            body_fat: 15.0,
            system: MeasurementSystem::Metric,
        });
        assert_eq!(result.ffmi, 21.0);
        assert_eq!(result.adjusted_ffmi, 21.0);
        assert_eq!(result.fat_free_mass, 68.0);
        assert_eq!(result.category, FfmiCategory::AboveAverage);
    }

    #[test]
    fn short_lifters_are_adjusted_up() {
        let result = ffmi(&FfmiInput {
            weight: 70.0,
            height: 165.0,
            body_fat: 20.0,
            system: MeasurementSystem::Metric,
        });
        assert_eq!(result.ffmi, 20.6);
        assert_eq!(result.adjusted_ffmi, 21.5);
        assert!(result.adjusted_ffmi > result.ffmi);
    }

    #[test]
    fn imperial_reports_pounds() {
        let result = ffmi(&FfmiInput {
            weight: 180.0,
            height: 70.0,
            body_fat: 12.0,
            system: MeasurementSystem::Imperial,
        });
        assert_eq!(result.ffmi, 22.7);
        assert_eq!(result.adjusted_ffmi, 22.9);
        assert_eq!(result.fat_free_mass, 158.4);
        assert_eq!(result.category, FfmiCategory::Excellent);
    }

    #[test]
    fn convert_only_touches_mass() {
        let result = ffmi(&FfmiInput {
            weight: 80.0,
            height: 180.0,
            body_fat: 15.0,
            system: MeasurementSystem::Metric,
        });
        let converted = result.convert(MeasurementSystem::Metric, MeasurementSystem::Imperial);
        assert_eq!(converted.fat_free_mass, 149.9);
        assert_eq!(converted.ffmi, result.ffmi);
        assert_eq!(converted.category, result.category);
        assert_eq!(result.convert(MeasurementSystem::Metric, MeasurementSystem::Metric), result);
    }

    #[test]
    fn categories() {
        assert_eq!(FfmiCategory::classify(17.9), FfmiCategory::BelowAverage);
        assert_eq!(FfmiCategory::classify(18.0), FfmiCategory::Average);
        assert_eq!(FfmiCategory::classify(23.9), FfmiCategory::Excellent);
        assert_eq!(FfmiCategory::classify(25.0), FfmiCategory::Superior);
        assert_eq!(FfmiCategory::classify(26.0), FfmiCategory::Enhanced);
        assert_eq!(FfmiCategory::Superior.to_string(), "Superior - Natural limit");
    }
}
