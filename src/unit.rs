use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};

pub const LBS_TO_KG: f64 = 0.453_592;
pub const KG_TO_LBS: f64 = 2.204_62;
pub const INCHES_TO_CM: f64 = 2.54;

/// Unit a plate, bar or lift is weighed in.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd, Ord, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeightUnit {
    #[default]
    Kg,
    Lbs,
}

impl WeightUnit {
    /// Factor that turns a value in `self` into a value in `to`.
    #[must_use]
    pub fn factor_to(self, to: WeightUnit) -> f64 {
        match (self, to) {
            (WeightUnit::Kg, WeightUnit::Lbs) => KG_TO_LBS,
            (WeightUnit::Lbs, WeightUnit::Kg) => LBS_TO_KG,
            _ => 1.0,
        }
    }
}

impl Display for WeightUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WeightUnit::Kg => write!(f, "kg"),
            WeightUnit::Lbs => write!(f, "lbs"),
        }
    }
}

impl FromStr for WeightUnit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "kg" | "kgs" => Ok(WeightUnit::Kg),
            "lb" | "lbs" => Ok(WeightUnit::Lbs),
            _ => Err(format!("Invalid weight unit '{s}', expected kg or lbs.")),
        }
    }
}

/// Unit system for body measurements: kg/cm or lbs/inches.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MeasurementSystem {
    #[default]
    Metric,
    Imperial,
}

impl MeasurementSystem {
    #[must_use]
    pub fn weight_unit(self) -> WeightUnit {
        match self {
            MeasurementSystem::Metric => WeightUnit::Kg,
            MeasurementSystem::Imperial => WeightUnit::Lbs,
        }
    }

    #[must_use]
    pub fn mass_to_kg(self, mass: f64) -> f64 {
        match self {
            MeasurementSystem::Metric => mass,
            MeasurementSystem::Imperial => mass * LBS_TO_KG,
        }
    }

    #[must_use]
    pub fn length_to_cm(self, length: f64) -> f64 {
        match self {
            MeasurementSystem::Metric => length,
            MeasurementSystem::Imperial => length * INCHES_TO_CM,
        }
    }

    #[must_use]
    pub fn length_label(self) -> &'static str {
        match self {
            MeasurementSystem::Metric => "cm",
            MeasurementSystem::Imperial => "in",
        }
    }
}

impl Display for MeasurementSystem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MeasurementSystem::Metric => write!(f, "metric"),
            MeasurementSystem::Imperial => write!(f, "imperial"),
        }
    }
}

impl FromStr for MeasurementSystem {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "metric" | "m" => Ok(MeasurementSystem::Metric),
            "imperial" | "i" => Ok(MeasurementSystem::Imperial),
            _ => Err(format!("Invalid unit system '{s}', expected metric or imperial.")),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    Male,
    Female,
}

impl Display for Sex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Sex::Male => write!(f, "male"),
            Sex::Female => write!(f, "female"),
        }
    }
}

impl FromStr for Sex {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "male" | "m" => Ok(Sex::Male),
            "female" | "f" => Ok(Sex::Female),
            _ => Err(format!("Invalid sex '{s}', expected male or female.")),
        }
    }
}
