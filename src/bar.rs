use std::fmt::Display;

use serde::Serialize;

use crate::unit::WeightUnit;

/// Conventional barbell weight for `unit`: an Olympic bar is 20 kg or 45 lbs.
#[must_use]
pub fn default_bar_weight(unit: WeightUnit) -> f64 {
    match unit {
        WeightUnit::Kg => 20.0,
        WeightUnit::Lbs => 45.0,
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Bar {
    pub weight: f64,
    pub unit: WeightUnit,
}

impl Bar {
    #[must_use]
    pub fn new(weight: f64, unit: WeightUnit) -> Self {
        Bar { weight, unit }
    }

    #[must_use]
    pub fn standard(unit: WeightUnit) -> Self {
        Bar::new(default_bar_weight(unit), unit)
    }

    #[must_use]
    pub fn weight(&self) -> f64 {
        self.weight
    }

    #[must_use]
    pub fn unit(&self) -> WeightUnit {
        self.unit
    }
}

impl Display for Bar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.weight, self.unit)
    }
}
