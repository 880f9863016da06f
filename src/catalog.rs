use crate::{plate::Plate, unit::WeightUnit};

const KG_PLATES: [Plate; 7] = [
    Plate::new(25.0, "red"),
    Plate::new(20.0, "blue"),
    Plate::new(15.0, "yellow"),
    Plate::new(10.0, "green"),
    Plate::new(5.0, "white"),
    Plate::new(2.5, "dark red"),
    Plate::new(1.25, "gray"),
];

const LBS_PLATES: [Plate; 6] = [
    Plate::new(45.0, "red"),
    Plate::new(35.0, "blue"),
    Plate::new(25.0, "yellow"),
    Plate::new(10.0, "green"),
    Plate::new(5.0, "white"),
    Plate::new(2.5, "dark red"),
];

/// Plates found in a typical gym for `unit`, heaviest first.
#[must_use]
pub fn catalog(unit: WeightUnit) -> &'static [Plate] {
    match unit {
        WeightUnit::Kg => &KG_PLATES,
        WeightUnit::Lbs => &LBS_PLATES,
    }
}
