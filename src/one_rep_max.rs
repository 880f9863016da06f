use std::fmt::Display;

use serde::Serialize;
use tracing::debug;

use crate::{rounding::round_to, unit::WeightUnit};

pub const MIN_REPS: u32 = 1;
pub const MAX_REPS: u32 = 20;

const DECIMAL_PLACES: i32 = 1;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OneRepMaxInput {
    pub weight: f64,
    pub reps: u32,
    pub unit: WeightUnit,
}

/// Published one-rep-max estimators.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Formula {
    Brzycki,
    Epley,
    Lander,
    Lombardi,
    Mayhew,
    OConnor,
    Wathen,
}

impl Formula {
    pub const ALL: [Formula; 7] = [
        Formula::Brzycki,
        Formula::Epley,
        Formula::Lander,
        Formula::Lombardi,
        Formula::Mayhew,
        Formula::OConnor,
        Formula::Wathen,
    ];

    /// Estimated single-rep max for `weight` lifted `reps` times, unrounded.
    #[must_use]
    pub fn estimate(self, weight: f64, reps: u32) -> f64 {
        let reps = f64::from(reps);
        match self {
            Formula::Brzycki => weight * (36.0 / (37.0 - reps)),
            Formula::Epley => weight * (1.0 + reps / 30.0),
            Formula::Lander => (100.0 * weight) / (101.3 - 2.671_23 * reps),
            Formula::Lombardi => weight * reps.powf(0.1),
            Formula::Mayhew => (100.0 * weight) / (52.2 + 41.9 * (-0.055 * reps).exp()),
            Formula::OConnor => weight * (1.0 + 0.025 * reps),
            Formula::Wathen => (100.0 * weight) / (48.8 + 53.8 * (-0.075 * reps).exp()),
        }
    }
}

impl Display for Formula {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Formula::Brzycki => write!(f, "Brzycki"),
            Formula::Epley => write!(f, "Epley"),
            Formula::Lander => write!(f, "Lander"),
            Formula::Lombardi => write!(f, "Lombardi"),
            Formula::Mayhew => write!(f, "Mayhew"),
            Formula::OConnor => write!(f, "O'Connor"),
            Formula::Wathen => write!(f, "Wathen"),
        }
    }
}

/// Estimates from every formula plus their average, rounded to one decimal.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct OneRepMax {
    pub brzycki: f64,
    pub epley: f64,
    pub lander: f64,
    pub lombardi: f64,
    pub mayhew: f64,
    pub o_connor: f64,
    pub wathen: f64,
    pub average: f64,
}

impl OneRepMax {
    #[must_use]
    pub fn get(&self, formula: Formula) -> f64 {
        match formula {
            Formula::Brzycki => self.brzycki,
            Formula::Epley => self.epley,
            Formula::Lander => self.lander,
            Formula::Lombardi => self.lombardi,
            Formula::Mayhew => self.mayhew,
            Formula::OConnor => self.o_connor,
            Formula::Wathen => self.wathen,
        }
    }

    /// Re-expresses every estimate in `to`. Converting within a unit is a no-op.
    #[must_use]
    pub fn convert(self, from: WeightUnit, to: WeightUnit) -> Self {
        if from == to {
            return self;
        }

        self.map(|value| round_to(value * from.factor_to(to), DECIMAL_PLACES))
    }

    fn map(self, f: impl Fn(f64) -> f64) -> Self {
        OneRepMax {
            brzycki: f(self.brzycki),
            epley: f(self.epley),
            lander: f(self.lander),
            lombardi: f(self.lombardi),
            mayhew: f(self.mayhew),
            o_connor: f(self.o_connor),
            wathen: f(self.wathen),
            average: f(self.average),
        }
    }
}

#[must_use]
pub fn one_rep_max(input: &OneRepMaxInput) -> OneRepMax {
    let estimates = Formula::ALL.map(|formula| formula.estimate(input.weight, input.reps));
    #[allow(clippy::cast_precision_loss)]
    let average = estimates.iter().sum::<f64>() / estimates.len() as f64;
    let [brzycki, epley, lander, lombardi, mayhew, o_connor, wathen] = estimates;

    debug!(weight = input.weight, reps = input.reps, average, "estimated one rep max");

    OneRepMax {
        brzycki,
        epley,
        lander,
        lombardi,
        mayhew,
        o_connor,
        wathen,
        average,
    }
    .map(|value| round_to(value, DECIMAL_PLACES))
}

/// Loads from 100% down to 50% of `max`, in 5% steps.
#[must_use]
pub fn percentage_table(max: f64) -> Vec<(u32, f64)> {
    (50..=100)
        .rev()
        .step_by(5)
        .map(|percent| (percent, round_to(max * f64::from(percent) / 100.0, DECIMAL_PLACES)))
        .collect()
}
