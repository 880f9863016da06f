//! Turns raw text fields into calculator inputs.
//!
//! Every field is trimmed, required to be a finite decimal and then checked
//! against its own rule. All failing fields are reported together. Rules that
//! relate two fields only run once every field parsed on its own.

use std::ops::RangeInclusive;

use crate::{
    body_fat::BodyFatInput,
    distribution::PlateInput,
    ffmi::{FfmiInput, MAX_BODY_FAT_PERCENTAGE, MIN_BODY_FAT_PERCENTAGE},
    one_rep_max::{MAX_REPS, MIN_REPS, OneRepMaxInput},
    tdee::{ActivityLevel, MAX_AGE, MIN_AGE, TdeeInput},
    unit::{MeasurementSystem, Sex, WeightUnit},
    validation_error::{FieldError, ValidationErrors},
};

struct Field {
    name: &'static str,
    label: &'static str,
    missing: &'static str,
}

impl Field {
    const fn new(name: &'static str, label: &'static str, missing: &'static str) -> Self {
        Field {
            name,
            label,
            missing,
        }
    }

    fn error(&self, message: impl Into<String>) -> FieldError {
        FieldError::new(self.name, message)
    }

    fn number(&self, raw: &str) -> Result<f64, FieldError> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Err(self.error(self.missing));
        }

        raw.parse::<f64>()
            .ok()
            .filter(|value| value.is_finite())
            .ok_or_else(|| self.error(format!("{} must be a number", self.label)))
    }

    fn positive(&self, raw: &str, message: &str) -> Result<f64, FieldError> {
        let value = self.number(raw)?;
        if value > 0.0 {
            Ok(value)
        } else {
            Err(self.error(message))
        }
    }

    fn within(
        &self,
        raw: &str,
        range: RangeInclusive<f64>,
        too_low: &str,
        too_high: &str,
    ) -> Result<f64, FieldError> {
        let value = self.number(raw)?;
        if value < *range.start() {
            Err(self.error(too_low))
        } else if value > *range.end() {
            Err(self.error(too_high))
        } else {
            Ok(value)
        }
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn whole(
        &self,
        raw: &str,
        range: RangeInclusive<u32>,
        too_low: &str,
        too_high: &str,
    ) -> Result<u32, FieldError> {
        let value = self.number(raw)?;
        if value.fract() != 0.0 {
            return Err(self.error(format!("{} must be a whole number", self.label)));
        }

        let range = f64::from(*range.start())..=f64::from(*range.end());
        if value < *range.start() {
            Err(self.error(too_low))
        } else if value > *range.end() {
            Err(self.error(too_high))
        } else {
            Ok(value as u32)
        }
    }
}

#[derive(Default)]
struct Collector(Vec<FieldError>);

impl Collector {
    fn take<T>(&mut self, result: Result<T, FieldError>) -> Option<T> {
        result.map_err(|error| self.0.push(error)).ok()
    }

    fn finish<T>(self, value: Option<T>) -> Result<T, ValidationErrors> {
        match value {
            Some(value) if self.0.is_empty() => Ok(value),
            _ => Err(ValidationErrors(self.0)),
        }
    }
}

const TARGET_WEIGHT: Field = Field::new("target_weight", "Target weight", "Please enter target weight");
const BAR_WEIGHT: Field = Field::new("bar_weight", "Bar weight", "Please enter bar weight");

/// # Errors
/// If either weight is missing, not a number or not positive, or if the
/// target does not exceed the bar.
pub fn validate_plate_input(
    target_weight: &str,
    bar_weight: &str,
    unit: WeightUnit,
) -> Result<PlateInput, ValidationErrors> {
    let mut errors = Collector::default();
    let target = errors.take(TARGET_WEIGHT.positive(target_weight, "Target weight must be greater than 0"));
    let bar = errors.take(BAR_WEIGHT.positive(bar_weight, "Bar weight must be greater than 0"));
    let (target_weight, bar_weight) = errors.finish(target.zip(bar))?;

    if target_weight <= bar_weight {
        return Err(TARGET_WEIGHT
            .error("Target weight must be greater than bar weight")
            .into());
    }

    Ok(PlateInput {
        target_weight,
        bar_weight,
        unit,
    })
}

const LIFT_WEIGHT: Field = Field::new("weight", "Weight", "Please enter weight");
const REPS: Field = Field::new("reps", "Reps", "Please enter reps");

/// # Errors
/// If the weight is not a positive number or reps are not a whole number
/// in the range the formulas are accurate for.
pub fn validate_one_rep_max_input(
    weight: &str,
    reps: &str,
    unit: WeightUnit,
) -> Result<OneRepMaxInput, ValidationErrors> {
    let mut errors = Collector::default();
    let weight = errors.take(LIFT_WEIGHT.positive(weight, "Weight must be greater than 0"));
    let reps = errors.take(REPS.whole(
        reps,
        MIN_REPS..=MAX_REPS,
        &format!("Reps must be at least {MIN_REPS}"),
        &format!("Reps must be {MAX_REPS} or less for accuracy"),
    ));

    let (weight, reps) = errors.finish(weight.zip(reps))?;
    Ok(OneRepMaxInput { weight, reps, unit })
}

const BODY_HEIGHT: Field = Field::new("height", "Height", "Height is required");
const WAIST: Field = Field::new("waist", "Waist measurement", "Waist measurement is required");
const NECK: Field = Field::new("neck", "Neck measurement", "Neck measurement is required");
const HIP: Field = Field::new("hip", "Hip measurement", "Hip measurement is required for females");

/// # Errors
/// If a measurement is missing or not positive, if `sex` is female and no
/// hip measurement was given, or if the neck is at least as large as the
/// girths it is subtracted from.
pub fn validate_body_fat_input(
    height: &str,
    waist: &str,
    neck: &str,
    hip: Option<&str>,
    sex: Sex,
    system: MeasurementSystem,
) -> Result<BodyFatInput, ValidationErrors> {
    let mut errors = Collector::default();
    let height = errors.take(BODY_HEIGHT.positive(height, "Height must be positive"));
    let waist = errors.take(WAIST.positive(waist, "Waist measurement must be positive"));
    let neck = errors.take(NECK.positive(neck, "Neck measurement must be positive"));
    let hip = match hip.map(str::trim).filter(|raw| !raw.is_empty()) {
        Some(raw) => errors
            .take(HIP.positive(raw, "Hip measurement must be positive"))
            .map(Some),
        None => Some(None),
    };

    let (((height, waist), neck), hip) = errors.finish(height.zip(waist).zip(neck).zip(hip))?;

    match (sex, hip) {
        (Sex::Female, None) => return Err(HIP.error(HIP.missing).into()),
        (Sex::Female, Some(hip)) if waist + hip <= neck => {
            return Err(WAIST
                .error("Waist and hip measurements must be larger than neck measurement")
                .into());
        }
        (Sex::Male, _) if waist <= neck => {
            return Err(WAIST.error("Waist measurement must be larger than neck measurement").into());
        }
        _ => {}
    }

    Ok(BodyFatInput {
        height,
        waist,
        neck,
        hip,
        sex,
        system,
    })
}

const FFMI_WEIGHT: Field = Field::new("weight", "Weight", "Please enter your weight");
const FFMI_HEIGHT: Field = Field::new("height", "Height", "Please enter your height");
const BODY_FAT: Field = Field::new(
    "body_fat",
    "Body fat percentage",
    "Please enter your body fat percentage",
);

/// # Errors
/// If weight or height is not positive, or body fat is outside 0-100%.
pub fn validate_ffmi_input(
    weight: &str,
    height: &str,
    body_fat: &str,
    system: MeasurementSystem,
) -> Result<FfmiInput, ValidationErrors> {
    let mut errors = Collector::default();
    let weight = errors.take(FFMI_WEIGHT.positive(weight, "Weight must be greater than 0"));
    let height = errors.take(FFMI_HEIGHT.positive(height, "Height must be greater than 0"));
    let body_fat = errors.take(BODY_FAT.within(
        body_fat,
        MIN_BODY_FAT_PERCENTAGE..=MAX_BODY_FAT_PERCENTAGE,
        &format!("Body fat percentage must be at least {MIN_BODY_FAT_PERCENTAGE}%"),
        &format!("Body fat percentage must be at most {MAX_BODY_FAT_PERCENTAGE}%"),
    ));

    let ((weight, height), body_fat) = errors.finish(weight.zip(height).zip(body_fat))?;
    Ok(FfmiInput {
        weight,
        height,
        body_fat,
        system,
    })
}

const AGE: Field = Field::new("age", "Age", "Age is required");
const BODY_WEIGHT: Field = Field::new("weight", "Weight", "Weight is required");
const ACTIVITY: Field = Field::new("activity", "Activity level", "Please select an activity level");

/// Accepts a named [`ActivityLevel`] or a raw multiplier.
fn activity_multiplier(raw: &str) -> Result<f64, FieldError> {
    match raw.parse::<ActivityLevel>() {
        Ok(level) => Ok(level.multiplier()),
        Err(_) => ACTIVITY.positive(raw, "Activity level must be positive"),
    }
}

/// # Errors
/// If age is not a whole number of years in range, weight, height or
/// activity is not positive.
pub fn validate_tdee_input(
    age: &str,
    weight: &str,
    height: &str,
    activity: &str,
    sex: Sex,
    system: MeasurementSystem,
) -> Result<TdeeInput, ValidationErrors> {
    let mut errors = Collector::default();
    let age = errors.take(AGE.whole(
        age,
        MIN_AGE..=MAX_AGE,
        &format!("Age must be at least {MIN_AGE} years"),
        &format!("Age must be {MAX_AGE} years or less"),
    ));
    let weight = errors.take(BODY_WEIGHT.positive(weight, "Weight must be positive"));
    let height = errors.take(BODY_HEIGHT.positive(height, "Height must be positive"));
    let activity = errors.take(activity_multiplier(activity));

    let (((age, weight), height), activity) =
        errors.finish(age.zip(weight).zip(height).zip(activity))?;

    Ok(TdeeInput {
        age,
        weight,
        height,
        activity,
        sex,
        system,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plate_errors(target: &str, bar: &str) -> ValidationErrors {
        validate_plate_input(target, bar, WeightUnit::Lbs).unwrap_err()
    }

    #[test]
    fn plate_input_accepts_decimals() {
        let input = validate_plate_input(" 242.5 ", "45", WeightUnit::Lbs).unwrap();
        assert_eq!(input.target_weight, 242.5);
        assert_eq!(input.bar_weight, 45.0);
        assert_eq!(input.unit, WeightUnit::Lbs);
    }

    #[test]
    fn plate_input_missing_fields() {
        let errors = plate_errors("", "  ");
        assert_eq!(errors.message_for("target_weight"), Some("Please enter target weight"));
        assert_eq!(errors.message_for("bar_weight"), Some("Please enter bar weight"));
        assert_eq!(errors.errors().len(), 2);
    }

    #[test]
    fn plate_input_rejects_non_numbers() {
        let errors = plate_errors("heavy", "45");
        assert_eq!(errors.message_for("target_weight"), Some("Target weight must be a number"));
        assert_eq!(errors.message_for("bar_weight"), None);

        let errors = plate_errors("NaN", "inf");
        assert_eq!(errors.errors().len(), 2);
    }

    #[test]
    fn plate_input_rejects_zero_and_negative() {
        let errors = plate_errors("0", "-45");
        assert_eq!(errors.message_for("target_weight"), Some("Target weight must be greater than 0"));
        assert_eq!(errors.message_for("bar_weight"), Some("Bar weight must be greater than 0"));
    }

    #[test]
    fn plate_input_target_must_exceed_bar() {
        for target in ["45", "40"] {
            let errors = plate_errors(target, "45");
            assert_eq!(
                errors.message_for("target_weight"),
                Some("Target weight must be greater than bar weight")
            );
        }
    }

    #[test]
    fn cross_field_rule_waits_for_valid_fields() {
        let errors = plate_errors("10", "");
        assert_eq!(errors.errors().len(), 1);
        assert_eq!(errors.message_for("bar_weight"), Some("Please enter bar weight"));
    }

    #[test]
    fn errors_display_joined() {
        assert_eq!(
            plate_errors("", "0").to_string(),
            "Please enter target weight; Bar weight must be greater than 0"
        );
    }

    #[test]
    fn one_rep_max_reps_range() {
        let input = validate_one_rep_max_input("100", "5", WeightUnit::Kg).unwrap();
        assert_eq!(input.reps, 5);

        let low = validate_one_rep_max_input("100", "0", WeightUnit::Kg).unwrap_err();
        assert_eq!(low.message_for("reps"), Some("Reps must be at least 1"));

        let high = validate_one_rep_max_input("100", "21", WeightUnit::Kg).unwrap_err();
        assert_eq!(high.message_for("reps"), Some("Reps must be 20 or less for accuracy"));

        let fraction = validate_one_rep_max_input("100", "5.5", WeightUnit::Kg).unwrap_err();
        assert_eq!(fraction.message_for("reps"), Some("Reps must be a whole number"));
    }

    #[test]
    fn one_rep_max_weight() {
        let errors = validate_one_rep_max_input("", "", WeightUnit::Kg).unwrap_err();
        assert_eq!(errors.message_for("weight"), Some("Please enter weight"));
        assert_eq!(errors.message_for("reps"), Some("Please enter reps"));

        let errors = validate_one_rep_max_input("-5", "3", WeightUnit::Kg).unwrap_err();
        assert_eq!(errors.message_for("weight"), Some("Weight must be greater than 0"));
    }

    #[test]
    fn body_fat_male_without_hip() {
        let input = validate_body_fat_input("180", "85", "38", None, Sex::Male, MeasurementSystem::Metric).unwrap();
        assert_eq!(input.hip, None);

        let input =
            validate_body_fat_input("180", "85", "38", Some(" "), Sex::Male, MeasurementSystem::Metric).unwrap();
        assert_eq!(input.hip, None);
    }

    #[test]
    fn body_fat_female_requires_hip() {
        let errors =
            validate_body_fat_input("165", "75", "33", None, Sex::Female, MeasurementSystem::Metric).unwrap_err();
        assert_eq!(errors.message_for("hip"), Some("Hip measurement is required for females"));

        let input =
            validate_body_fat_input("165", "75", "33", Some("100"), Sex::Female, MeasurementSystem::Metric)
                .unwrap();
        assert_eq!(input.hip, Some(100.0));
    }

    #[test]
    fn body_fat_waist_must_exceed_neck() {
        for waist in ["38", "30"] {
            let errors =
                validate_body_fat_input("180", waist, "38", None, Sex::Male, MeasurementSystem::Metric).unwrap_err();
            assert_eq!(
                errors.message_for("waist"),
                Some("Waist measurement must be larger than neck measurement")
            );
        }

        let errors =
            validate_body_fat_input("165", "20", "33", Some("10"), Sex::Female, MeasurementSystem::Metric)
                .unwrap_err();
        assert_eq!(
            errors.message_for("waist"),
            Some("Waist and hip measurements must be larger than neck measurement")
        );

        let input =
            validate_body_fat_input("165", "20", "33", Some("14"), Sex::Female, MeasurementSystem::Metric).unwrap();
        assert!(crate::body_fat::body_fat(&input).percentage.is_finite());
    }

    #[test]
    fn body_fat_measurements_must_be_positive() {
        let errors =
            validate_body_fat_input("", "0", "x", Some("-1"), Sex::Male, MeasurementSystem::Metric).unwrap_err();
        assert_eq!(errors.message_for("height"), Some("Height is required"));
        assert_eq!(errors.message_for("waist"), Some("Waist measurement must be positive"));
        assert_eq!(errors.message_for("neck"), Some("Neck measurement must be a number"));
        assert_eq!(errors.message_for("hip"), Some("Hip measurement must be positive"));
    }

    #[test]
    fn ffmi_body_fat_bounds() {
        assert!(validate_ffmi_input("80", "180", "0", MeasurementSystem::Metric).is_ok());
        assert!(validate_ffmi_input("80", "180", "100", MeasurementSystem::Metric).is_ok());

        let errors = validate_ffmi_input("80", "180", "101", MeasurementSystem::Metric).unwrap_err();
        assert_eq!(errors.message_for("body_fat"), Some("Body fat percentage must be at most 100%"));

        let errors = validate_ffmi_input("80", "180", "-1", MeasurementSystem::Metric).unwrap_err();
        assert_eq!(errors.message_for("body_fat"), Some("Body fat percentage must be at least 0%"));
    }

    #[test]
    fn ffmi_missing_fields() {
        let errors = validate_ffmi_input("", "", "", MeasurementSystem::Metric).unwrap_err();
        assert_eq!(errors.message_for("weight"), Some("Please enter your weight"));
        assert_eq!(errors.message_for("height"), Some("Please enter your height"));
        assert_eq!(errors.message_for("body_fat"), Some("Please enter your body fat percentage"));
    }

    #[test]
    fn tdee_age_range() {
        let metric = MeasurementSystem::Metric;
        assert!(validate_tdee_input("15", "80", "180", "1.2", Sex::Male, metric).is_ok());
        assert!(validate_tdee_input("80", "80", "180", "1.2", Sex::Male, metric).is_ok());

        let young = validate_tdee_input("14", "80", "180", "1.2", Sex::Male, metric).unwrap_err();
        assert_eq!(young.message_for("age"), Some("Age must be at least 15 years"));

        let old = validate_tdee_input("81", "80", "180", "1.2", Sex::Male, metric).unwrap_err();
        assert_eq!(old.message_for("age"), Some("Age must be 80 years or less"));

        let fraction = validate_tdee_input("30.5", "80", "180", "1.2", Sex::Male, metric).unwrap_err();
        assert_eq!(fraction.message_for("age"), Some("Age must be a whole number"));
    }

    #[test]
    fn tdee_activity_by_name_or_number() {
        let metric = MeasurementSystem::Metric;
        let named = validate_tdee_input("30", "80", "180", "moderate", Sex::Male, metric).unwrap();
        assert_eq!(named.activity, 1.55);

        let raw = validate_tdee_input("30", "80", "180", "1.4", Sex::Male, metric).unwrap();
        assert_eq!(raw.activity, 1.4);

        let errors = validate_tdee_input("30", "80", "180", "0", Sex::Male, metric).unwrap_err();
        assert_eq!(errors.message_for("activity"), Some("Activity level must be positive"));
    }
}
