use std::fmt::Display;

use itertools::Itertools;
use serde::Serialize;
use tracing::{debug, trace};

use crate::{bar::Bar, catalog::catalog, plate::PlateAllocation, unit::WeightUnit};

/// Per-side residue under which a target counts as loaded exactly.
/// Absolute, in whichever unit is active.
pub const PLATE_WEIGHT_TOLERANCE: f64 = 0.01;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlateInput {
    pub target_weight: f64,
    pub bar_weight: f64,
    pub unit: WeightUnit,
}

impl PlateInput {
    #[must_use]
    pub fn distribute(&self) -> Distribution {
        distribute(self.target_weight, self.bar_weight, self.unit)
    }
}

/// Plates to put on each side of a bar to reach, or get as close as possible
/// to, a target weight.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Distribution {
    bar: Bar,
    target_weight: f64,
    allocations: Vec<PlateAllocation>,
    total_weight: f64,
    is_exact: bool,
}

impl Distribution {
    #[must_use]
    pub fn bar(&self) -> Bar {
        self.bar
    }

    #[must_use]
    pub fn unit(&self) -> WeightUnit {
        self.bar.unit
    }

    #[must_use]
    pub fn target_weight(&self) -> f64 {
        self.target_weight
    }

    /// Allocations with a non-zero count, heaviest plate first.
    #[must_use]
    pub fn allocations(&self) -> &[PlateAllocation] {
        &self.allocations
    }

    /// Bar plus both sides of plates.
    #[must_use]
    pub fn total_weight(&self) -> f64 {
        self.total_weight
    }

    #[must_use]
    pub fn is_exact(&self) -> bool {
        self.is_exact
    }

    #[must_use]
    pub fn is_impossible(&self) -> bool {
        !self.is_exact
    }

    /// Weight of the plates on both sides, without the bar.
    #[must_use]
    pub fn plates_weight(&self) -> f64 {
        self.total_weight - self.bar.weight
    }

    /// Saturates instead of overflowing for absurdly heavy targets.
    #[must_use]
    pub fn plates_per_side(&self) -> u64 {
        self.allocations
            .iter()
            .map(PlateAllocation::count)
            .fold(0, u64::saturating_add)
    }
}

impl Display for Distribution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.allocations.is_empty() {
            return write!(f, "bar only ({}{})", self.total_weight, self.unit());
        }

        write!(
            f,
            "{} per side ({}{})",
            self.allocations.iter().join(" + "),
            self.total_weight,
            self.unit()
        )
    }
}

/// Greedy plate breakdown for `target_weight` on a bar of `bar_weight`.
///
/// Plates are taken heaviest first, as many of each as fit, without
/// backtracking. This can miss an exact loading that a different mix would
/// hit; such targets are reported as not exact rather than searched for.
///
/// Targets at or below the bar weight produce an empty allocation. Those
/// are exact only when the target equals the bar.
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn distribute(target_weight: f64, bar_weight: f64, unit: WeightUnit) -> Distribution {
    let mut remaining = (target_weight - bar_weight) / 2.0;

    let allocations = catalog(unit)
        .iter()
        .filter_map(|plate| {
            let count = (remaining / plate.weight()).floor().max(0.0) as u64;
            remaining -= count as f64 * plate.weight();
            trace!(plate = plate.weight(), count, remaining, "greedy step");
            (count > 0).then(|| PlateAllocation::new(*plate, count))
        })
        .collect::<Vec<_>>();

    let per_side = allocations
        .iter()
        .map(PlateAllocation::side_weight)
        .sum::<f64>();
    let total_weight = bar_weight + per_side * 2.0;
    let is_exact = remaining.abs() <= PLATE_WEIGHT_TOLERANCE;

    debug!(
        target_weight,
        bar_weight,
        %unit,
        total_weight,
        residue = remaining,
        is_exact,
        "distributed plates"
    );

    Distribution {
        bar: Bar::new(bar_weight, unit),
        target_weight,
        allocations,
        total_weight,
        is_exact,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bar::default_bar_weight;

    fn counts(distribution: &Distribution) -> Vec<(f64, u64)> {
        distribution
            .allocations()
            .iter()
            .map(|a| (a.weight(), a.count()))
            .collect()
    }

    #[test]
    fn bar_only_is_exact() {
        let result = distribute(45.0, 45.0, WeightUnit::Lbs);
        assert!(result.allocations().is_empty());
        assert_eq!(result.total_weight(), 45.0);
        assert!(result.is_exact());
    }

    #[test]
    fn bar_only_for_any_bar_weight() {
        for bar in [15.0, 20.0, 33.3, 45.0] {
            let result = distribute(bar, bar, WeightUnit::Kg);
            assert!(result.allocations().is_empty());
            assert!(result.is_exact());
            assert_eq!(result.total_weight(), bar);
        }
    }

    #[test]
    fn two_plates_a_side() {
        let result = distribute(225.0, 45.0, WeightUnit::Lbs);
        assert_eq!(counts(&result), vec![(45.0, 2)]);
        assert_eq!(result.allocations()[0].color(), "red");
        assert_eq!(result.total_weight(), 225.0);
        assert!(result.is_exact());
    }

    #[test]
    fn mixed_plates() {
        let result = distribute(185.0, 45.0, WeightUnit::Lbs);
        assert_eq!(counts(&result), vec![(45.0, 1), (25.0, 1)]);
        assert!(result.is_exact());

        let result = distribute(100.0, 45.0, WeightUnit::Lbs);
        assert_eq!(counts(&result), vec![(25.0, 1), (2.5, 1)]);
        assert!(result.is_exact());
    }

    #[test]
    fn unreachable_target_reports_closest() {
        let result = distribute(242.5, 45.0, WeightUnit::Lbs);
        assert_eq!(counts(&result), vec![(45.0, 2), (5.0, 1), (2.5, 1)]);
        assert_eq!(result.total_weight(), 240.0);
        assert!(!result.is_exact());
        assert!(result.is_impossible());
    }

    #[test]
    fn sub_plate_remainder_is_not_exact() {
        let result = distribute(46.0, 45.0, WeightUnit::Lbs);
        assert!(result.allocations().is_empty());
        assert_eq!(result.total_weight(), 45.0);
        assert!(!result.is_exact());
    }

    #[test]
    fn target_below_bar() {
        let result = distribute(40.0, 45.0, WeightUnit::Lbs);
        assert!(result.allocations().is_empty());
        assert_eq!(result.total_weight(), 45.0);
        assert!(!result.is_exact());
    }

    #[test]
    fn kg_uses_change_plates() {
        let result = distribute(107.5, 20.0, WeightUnit::Kg);
        assert_eq!(counts(&result), vec![(25.0, 1), (15.0, 1), (2.5, 1), (1.25, 1)]);
        assert_eq!(result.total_weight(), 107.5);
        assert!(result.is_exact());
    }

    #[test]
    fn heavy_target() {
        let result = distribute(1000.0, 45.0, WeightUnit::Lbs);
        assert_eq!(counts(&result), vec![(45.0, 10), (25.0, 1), (2.5, 1)]);
        assert_eq!(result.total_weight(), 1000.0);
        assert!(result.is_exact());
    }

    #[test]
    fn custom_bar() {
        let result = distribute(35.0, 15.0, WeightUnit::Lbs);
        assert_eq!(counts(&result), vec![(10.0, 1)]);
        assert!(result.is_exact());
    }

    #[test]
    fn skips_plates_that_do_not_fit() {
        let result = distribute(42.5, 20.0, WeightUnit::Kg);
        assert_eq!(counts(&result), vec![(10.0, 1), (1.25, 1)]);
        assert!(result.is_exact());
    }

    #[test]
    fn total_matches_allocations() {
        for unit in [WeightUnit::Kg, WeightUnit::Lbs] {
            let bar = default_bar_weight(unit);
            let mut target = bar;
            while target <= 500.0 {
                let result = distribute(target, bar, unit);
                let per_side: f64 = result.allocations().iter().map(PlateAllocation::side_weight).sum();
                assert_eq!(result.total_weight(), bar + 2.0 * per_side);
                target += 0.75;
            }
        }
    }

    #[test]
    fn every_step_takes_as_many_as_fit() {
        for target in [62.5, 107.5, 133.75, 297.5] {
            let result = distribute(target, 20.0, WeightUnit::Kg);
            let mut remaining = (target - 20.0) / 2.0;
            for plate in catalog(WeightUnit::Kg) {
                let count = result
                    .allocations()
                    .iter()
                    .find(|a| a.weight() == plate.weight())
                    .map_or(0, PlateAllocation::count);
                #[allow(clippy::cast_precision_loss)]
                let taken = count as f64 * plate.weight();
                assert!(taken <= remaining);
                assert!(remaining < taken + plate.weight());
                remaining -= taken;
            }
        }
    }

    #[test]
    fn huge_target_keeps_taking_heaviest_plate() {
        let result = distribute(1e12, 45.0, WeightUnit::Lbs);
        assert_eq!(counts(&result), vec![(45.0, 11_111_111_110), (25.0, 1), (2.5, 1)]);
        assert_eq!(result.total_weight(), 1e12);
        assert!(result.is_exact());
        assert_eq!(result.plates_per_side(), 11_111_111_112);

        let mut remaining = (1e12 - 45.0) / 2.0;
        for plate in catalog(WeightUnit::Lbs) {
            let count = result
                .allocations()
                .iter()
                .find(|a| a.weight() == plate.weight())
                .map_or(0, PlateAllocation::count);
            #[allow(clippy::cast_precision_loss)]
            let taken = count as f64 * plate.weight();
            assert!(taken <= remaining, "{plate}");
            assert!(remaining < taken + plate.weight(), "{plate}");
            remaining -= taken;
        }
    }

    #[test]
    fn allocations_descend() {
        let result = distribute(297.5, 20.0, WeightUnit::Kg);
        assert!(
            result
                .allocations()
                .iter()
                .tuple_windows()
                .all(|(a, b)| a.weight() > b.weight())
        );
    }

    #[test]
    fn every_five_pounds_is_loadable() {
        let mut target = 45.0;
        while target <= 600.0 {
            assert!(distribute(target, 45.0, WeightUnit::Lbs).is_exact(), "{target}");
            target += 5.0;
        }
    }

    #[test]
    fn repeated_calls_agree() {
        assert_eq!(
            distribute(242.5, 45.0, WeightUnit::Lbs),
            distribute(242.5, 45.0, WeightUnit::Lbs)
        );
    }

    #[test]
    fn display() {
        assert_eq!(
            distribute(185.0, 45.0, WeightUnit::Lbs).to_string(),
            "1x 45 + 1x 25 per side (185lbs)"
        );
        assert_eq!(distribute(20.0, 20.0, WeightUnit::Kg).to_string(), "bar only (20kg)");
    }

    #[test]
    fn plates_weight_excludes_bar() {
        let result = distribute(107.5, 20.0, WeightUnit::Kg);
        assert_eq!(result.plates_weight(), 87.5);
        assert_eq!(result.plates_per_side(), 4);
    }
}
