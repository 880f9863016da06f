use std::fmt::Display;

use serde::Serialize;
use tracing::debug;

use crate::{
    rounding::round_to,
    unit::{MeasurementSystem, Sex},
};

pub const METHOD: &str = "US Navy";

/// Tape measurements in the units of `system` (centimetres or inches).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BodyFatInput {
    pub height: f64,
    pub waist: f64,
    pub neck: f64,
    pub hip: Option<f64>,
    pub sex: Sex,
    pub system: MeasurementSystem,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum BodyFatCategory {
    EssentialFat,
    Athletic,
    Fitness,
    Average,
    AboveAverage,
}

impl BodyFatCategory {
    /// Upper bounds (exclusive) of every category but the last.
    fn thresholds(sex: Sex) -> [f64; 4] {
        match sex {
            Sex::Male => [6.0, 14.0, 18.0, 25.0],
            Sex::Female => [14.0, 21.0, 25.0, 32.0],
        }
    }

    #[must_use]
    pub fn classify(percentage: f64, sex: Sex) -> Self {
        let [essential, athletic, fitness, average] = Self::thresholds(sex);
        match percentage {
            p if p < essential => BodyFatCategory::EssentialFat,
            p if p < athletic => BodyFatCategory::Athletic,
            p if p < fitness => BodyFatCategory::Fitness,
            p if p < average => BodyFatCategory::Average,
            _ => BodyFatCategory::AboveAverage,
        }
    }
}

impl Display for BodyFatCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BodyFatCategory::EssentialFat => write!(f, "Essential fat (too low)"),
            BodyFatCategory::Athletic => write!(f, "Athletic"),
            BodyFatCategory::Fitness => write!(f, "Fitness"),
            BodyFatCategory::Average => write!(f, "Average"),
            BodyFatCategory::AboveAverage => write!(f, "Above average"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct BodyFat {
    pub percentage: f64,
    pub category: BodyFatCategory,
    pub method: &'static str,
}

#[must_use]
pub fn male_body_fat(height_cm: f64, waist_cm: f64, neck_cm: f64) -> f64 {
    495.0 / (1.0324 - 0.190_77 * (waist_cm - neck_cm).log10() + 0.154_56 * height_cm.log10())
        - 450.0
}

#[must_use]
pub fn female_body_fat(height_cm: f64, waist_cm: f64, hip_cm: f64, neck_cm: f64) -> f64 {
    495.0
        / (1.295_79 - 0.350_04 * (waist_cm + hip_cm - neck_cm).log10() + 0.221 * height_cm.log10())
        - 450.0
}

/// Body fat percentage by the US Navy circumference method.
///
/// A missing hip measurement counts as zero, which only matters for the
/// female formula; validation requires it there.
#[must_use]
pub fn body_fat(input: &BodyFatInput) -> BodyFat {
    let system = input.system;
    let height = system.length_to_cm(input.height);
    let waist = system.length_to_cm(input.waist);
    let neck = system.length_to_cm(input.neck);
    let hip = input.hip.map_or(0.0, |hip| system.length_to_cm(hip));

    let percentage = match input.sex {
        Sex::Male => male_body_fat(height, waist, neck),
        Sex::Female => female_body_fat(height, waist, hip, neck),
    };
    let category = BodyFatCategory::classify(percentage, input.sex);

    debug!(percentage, %category, sex = %input.sex, "estimated body fat");

    BodyFat {
        percentage: round_to(percentage, 1),
        category,
        method: METHOD,
    }
}
