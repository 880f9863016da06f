use std::fmt::Display;

use serde::Serialize;

/// A plate denomination: its weight and the color it is painted in.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Plate {
    weight: f64,
    color: &'static str,
}

impl Plate {
    #[must_use]
    pub const fn new(weight: f64, color: &'static str) -> Self {
        Plate { weight, color }
    }

    #[must_use]
    pub fn weight(&self) -> f64 {
        self.weight
    }

    #[must_use]
    pub fn color(&self) -> &'static str {
        self.color
    }
}

impl Display for Plate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.weight, self.color)
    }
}

/// How many plates of one denomination go on each side of the bar.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct PlateAllocation {
    #[serde(flatten)]
    plate: Plate,
    count: u64,
}

impl PlateAllocation {
    #[must_use]
    pub fn new(plate: Plate, count: u64) -> Self {
        PlateAllocation { plate, count }
    }

    #[must_use]
    pub fn plate(&self) -> Plate {
        self.plate
    }

    #[must_use]
    pub fn weight(&self) -> f64 {
        self.plate.weight
    }

    #[must_use]
    pub fn color(&self) -> &'static str {
        self.plate.color
    }

    #[must_use]
    pub fn count(&self) -> u64 {
        self.count
    }

    /// Weight this allocation adds to a single side.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn side_weight(&self) -> f64 {
        self.plate.weight * self.count as f64
    }
}

impl Display for PlateAllocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x {}", self.count, self.plate.weight)
    }
}
