use std::{fmt::Display, str::FromStr};

use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::{
    body_fat::BodyFat,
    distribution::Distribution,
    ffmi::Ffmi,
    one_rep_max::{Formula, OneRepMax, percentage_table},
    plate::PlateAllocation,
    tdee::Tdee,
    unit::{MeasurementSystem, WeightUnit},
};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "text" | "table" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Invalid output format '{s}', expected text or json.")),
        }
    }
}

/// Serializes `value` as pretty JSON, or renders it with `text`.
///
/// # Errors
/// If `value` fails to serialize.
pub fn render<T: Serialize>(
    format: OutputFormat,
    value: &T,
    text: impl FnOnce(&T) -> String,
) -> serde_json::Result<String> {
    match format {
        OutputFormat::Text => Ok(text(value)),
        OutputFormat::Json => serde_json::to_string_pretty(value),
    }
}

/// Stacks taller than this are drawn once with a count suffix.
pub const MAX_DRAWN_PLATES: u64 = 10;

fn plate_stack(allocation: &PlateAllocation) -> String {
    let label = format!("[{}]", allocation.weight());
    match usize::try_from(allocation.count()) {
        Ok(count) if allocation.count() <= MAX_DRAWN_PLATES => label.repeat(count),
        _ => format!("{label}x{}", allocation.count()),
    }
}

/// A side-on sketch of the loaded bar, heaviest plates innermost.
#[must_use]
pub fn bar_diagram(distribution: &Distribution) -> String {
    let inner_to_outer = distribution
        .allocations()
        .iter()
        .map(plate_stack)
        .collect::<Vec<_>>();

    let left = inner_to_outer.iter().rev().join("");
    let right = inner_to_outer.iter().join("");

    format!("{left}|=== {} ===|{right}", distribution.bar())
}

#[must_use]
pub fn distribution_text(distribution: &Distribution) -> String {
    let unit = distribution.unit();
    let bar = distribution.bar();

    if distribution.allocations().is_empty() && distribution.is_exact() {
        return format!(
            "No additional plates needed. Use just the bar weight of {} {unit}.",
            bar.weight()
        );
    }

    let mut lines = Vec::new();
    if distribution.is_impossible() {
        lines.push(format!(
            "Cannot achieve exact weight with available plates. Closest weight: {} {unit}",
            distribution.total_weight()
        ));
    }

    if !distribution.allocations().is_empty() {
        lines.push("Plates per side:".to_string());
        lines.extend(
            distribution
                .allocations()
                .iter()
                .map(|a| format!("  {}x {}{unit} ({})", a.count(), a.weight(), a.color())),
        );
    }

    lines.push(format!("Total weight: {} {unit}", distribution.total_weight()));
    lines.push(format!(
        "Bar: {bar} + Plates: {:.1}{unit}",
        distribution.plates_weight()
    ));
    lines.push(bar_diagram(distribution));
    lines.join("\n")
}

#[must_use]
pub fn one_rep_max_text(result: &OneRepMax, unit: WeightUnit, with_table: bool) -> String {
    let mut lines = vec![format!("Estimated 1RM: {} {unit}", result.average)];
    lines.extend(
        Formula::ALL
            .iter()
            .map(|formula| format!("  {:<10} {} {unit}", formula.to_string(), result.get(*formula))),
    );

    if with_table {
        lines.push("Training loads:".to_string());
        lines.extend(
            percentage_table(result.average)
                .into_iter()
                .map(|(percent, load)| format!("  {percent:>3}%  {load} {unit}")),
        );
    }

    lines.join("\n")
}

#[must_use]
pub fn body_fat_text(result: &BodyFat) -> String {
    format!(
        "Body fat: {}% ({})\nMethod: {}",
        result.percentage, result.category, result.method
    )
}

#[must_use]
pub fn ffmi_text(result: &Ffmi, system: MeasurementSystem) -> String {
    [
        format!("FFMI: {}", result.ffmi),
        format!("Adjusted FFMI: {}", result.adjusted_ffmi),
        format!("Fat-free mass: {} {}", result.fat_free_mass, system.weight_unit()),
        format!("Category: {}", result.category),
    ]
    .join("\n")
}

#[must_use]
pub fn tdee_text(result: &Tdee) -> String {
    [
        format!("BMR: {} kcal/day", result.bmr),
        format!("TDEE: {} kcal/day", result.tdee),
        format!("Cutting: {} kcal/day", result.cutting),
        format!("Bulking: {} kcal/day", result.bulking),
        format!("Formula: {}", result.formula),
    ]
    .join("\n")
}
