use std::{fmt::Display, str::FromStr};

use serde::Serialize;
use tracing::debug;

use crate::{
    rounding::round_to,
    unit::{MeasurementSystem, Sex},
};

pub const FORMULA: &str = "Mifflin-St Jeor";
pub const MIN_AGE: u32 = 15;
pub const MAX_AGE: u32 = 80;

const CUTTING_DEFICIT_MULTIPLIER: f64 = 0.8;
const BULKING_SURPLUS_MULTIPLIER: f64 = 1.1;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ActivityLevel {
    Sedentary,
    Light,
    Moderate,
    Active,
    Extreme,
}

impl ActivityLevel {
    pub const ALL: [ActivityLevel; 5] = [
        ActivityLevel::Sedentary,
        ActivityLevel::Light,
        ActivityLevel::Moderate,
        ActivityLevel::Active,
        ActivityLevel::Extreme,
    ];

    #[must_use]
    pub fn multiplier(self) -> f64 {
        match self {
            ActivityLevel::Sedentary => 1.2,
            ActivityLevel::Light => 1.375,
            ActivityLevel::Moderate => 1.55,
            ActivityLevel::Active => 1.725,
            ActivityLevel::Extreme => 1.9,
        }
    }

    #[must_use]
    pub fn description(self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "Sedentary (desk job, no exercise)",
            ActivityLevel::Light => "Lightly active (light exercise 1-3 days/week)",
            ActivityLevel::Moderate => "Moderately active (moderate exercise 3-5 days/week)",
            ActivityLevel::Active => "Very active (hard exercise 6-7 days/week)",
            ActivityLevel::Extreme => "Extremely active (very hard exercise, physical job)",
        }
    }
}

impl Display for ActivityLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ActivityLevel::Sedentary => write!(f, "sedentary"),
            ActivityLevel::Light => write!(f, "light"),
            ActivityLevel::Moderate => write!(f, "moderate"),
            ActivityLevel::Active => write!(f, "active"),
            ActivityLevel::Extreme => write!(f, "extreme"),
        }
    }
}

impl FromStr for ActivityLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ActivityLevel::ALL
            .into_iter()
            .find(|level| level.to_string() == s.trim().to_lowercase())
            .ok_or_else(|| format!("Unknown activity level '{s}'."))
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TdeeInput {
    pub age: u32,
    pub weight: f64,
    pub height: f64,
    pub activity: f64,
    pub sex: Sex,
    pub system: MeasurementSystem,
}

/// Daily calories, rounded to whole numbers.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Tdee {
    pub bmr: f64,
    pub tdee: f64,
    pub cutting: f64,
    pub bulking: f64,
    pub formula: &'static str,
}

/// Basal metabolic rate by the Mifflin-St Jeor equation.
#[must_use]
pub fn basal_metabolic_rate(weight_kg: f64, height_cm: f64, age: u32, sex: Sex) -> f64 {
    let offset = match sex {
        Sex::Male => 5.0,
        Sex::Female => -161.0,
    };
    10.0 * weight_kg + 6.25 * height_cm - 5.0 * f64::from(age) + offset
}

#[must_use]
pub fn tdee(input: &TdeeInput) -> Tdee {
    let weight_kg = input.system.mass_to_kg(input.weight);
    let height_cm = input.system.length_to_cm(input.height);

    let bmr = basal_metabolic_rate(weight_kg, height_cm, input.age, input.sex);
    let tdee = bmr * input.activity;

    debug!(bmr, tdee, activity = input.activity, "calculated tdee");

    Tdee {
        bmr: round_to(bmr, 0),
        tdee: round_to(tdee, 0),
        cutting: round_to(tdee * CUTTING_DEFICIT_MULTIPLIER, 0),
        bulking: round_to(tdee * BULKING_SURPLUS_MULTIPLIER, 0),
        formula: FORMULA,
    }
}
