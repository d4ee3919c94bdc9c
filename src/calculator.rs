// 🧮 Calculate
// Boundary operation: text inputs → profile → energy estimate → meal matches

use crate::error::{CalcResult, CalculatorError};
use crate::food::FoodTable;
use crate::matcher::{closest_meals, MealMatch};
use crate::metabolic::{estimate, Profile};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::debug;

/// Raw form fields as they arrive from the HTTP layer or the CLI.
///
/// Fields are optional so a missing field surfaces as InvalidInput
/// instead of a transport-level rejection.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CalculationRequest {
    pub weight: Option<String>,
    pub height: Option<String>,
    pub age: Option<String>,
    pub gender: Option<String>,
    pub activity_level: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CalculationResult {
    pub bmr: f64,
    /// kcal-scale daily requirement, used directly as the kJ threshold
    pub calorie_needs: f64,
    pub meals: Vec<MealMatch>,
}

impl CalculationRequest {
    /// Coerce every field, failing on the first invalid one.
    pub fn into_profile(self) -> CalcResult<Profile> {
        let weight_kg = parse_number(&self.weight, "weight")?;
        let height_cm = parse_number(&self.height, "height")?;
        let age_years = parse_integer(&self.age, "age")?;
        let gender = required(&self.gender, "gender")?.parse()?;
        let activity_level = required(&self.activity_level, "activity_level")?.parse()?;

        Ok(Profile {
            weight_kg,
            height_cm,
            age_years,
            gender,
            activity_level,
        })
    }
}

/// Validate the request, then estimate energy needs and match meals.
///
/// All validation happens before any matching work.
pub fn calculate(request: CalculationRequest, table: &FoodTable) -> CalcResult<CalculationResult> {
    let profile = request.into_profile()?;
    Ok(calculate_for_profile(&profile, table))
}

pub fn calculate_for_profile(profile: &Profile, table: &FoodTable) -> CalculationResult {
    let energy = estimate(profile);
    let meals = closest_meals(energy.daily_energy, table);

    debug!(
        bmr = energy.bmr,
        daily_energy = energy.daily_energy,
        matches = meals.len(),
        "Calculated energy requirement"
    );

    CalculationResult {
        bmr: energy.bmr,
        calorie_needs: energy.daily_energy,
        meals,
    }
}

// ============================================================================
// COERCION HELPERS
// ============================================================================

fn required<'a>(value: &'a Option<String>, field: &'static str) -> CalcResult<&'a str> {
    value
        .as_deref()
        .ok_or_else(|| CalculatorError::invalid(field, "field is required"))
}

fn parse_number(value: &Option<String>, field: &'static str) -> CalcResult<f64> {
    let raw = required(value, field)?;

    match f64::from_str(raw.trim()) {
        Ok(number) if number.is_finite() => Ok(number),
        _ => Err(CalculatorError::invalid(
            field,
            format!("'{}' is not a valid number", raw),
        )),
    }
}

fn parse_integer(value: &Option<String>, field: &'static str) -> CalcResult<i32> {
    let raw = required(value, field)?;

    raw.trim()
        .parse::<i32>()
        .map_err(|_| CalculatorError::invalid(field, format!("'{}' is not a valid integer", raw)))
}

// ============================================================================
// TESTS
// ============================================================================
