// 🎯 Meal Matcher
// Picks the food items whose energy sits closest to (and not above) a target

use crate::food::{FoodItem, FoodTable};
use serde::Serialize;
use serde_json::{Map, Number, Value};

/// Maximum number of meals returned per request
pub const MAX_MEALS: usize = 5;

/// Placeholder written into absent fields of returned rows
pub const MISSING_PLACEHOLDER: &str = "N/A";

/// Output field holding |energy − target|
pub const DIFFERENCE_FIELD: &str = "difference";

/// One selected row, ready for output.
///
/// Serializes as its field map alone, which already carries the
/// `difference` entry (overwriting any dataset column of that name).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MealMatch {
    #[serde(skip)]
    pub energy: f64,
    #[serde(skip)]
    pub difference: f64,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl MealMatch {
    fn from_item(item: &FoodItem, energy: f64, difference: f64) -> Self {
        let mut fields: Map<String, Value> = item
            .fields()
            .iter()
            .map(|(name, value)| {
                let value = match value {
                    Value::Null => Value::String(MISSING_PLACEHOLDER.to_string()),
                    other => other.clone(),
                };
                (name.clone(), value)
            })
            .collect();

        let resolved = Number::from_f64(difference)
            .map(Value::Number)
            .unwrap_or(Value::Null);
        fields.insert(DIFFERENCE_FIELD.to_string(), resolved);

        MealMatch {
            energy,
            difference,
            fields,
        }
    }
}

/// Return up to [`MAX_MEALS`] items with energy ≤ `target`, closest first.
///
/// Items without a parsed energy never qualify. Ties keep table order.
/// An empty result is a valid answer, not an error.
pub fn closest_meals(target: f64, table: &FoodTable) -> Vec<MealMatch> {
    let mut candidates: Vec<(&FoodItem, f64, f64)> = table
        .items()
        .iter()
        .filter_map(|item| {
            let energy = item.energy()?;
            (energy <= target).then(|| (item, energy, (energy - target).abs()))
        })
        .collect();

    // sort_by is stable
    candidates.sort_by(|a, b| a.2.total_cmp(&b.2));

    candidates
        .into_iter()
        .take(MAX_MEALS)
        .map(|(item, energy, difference)| MealMatch::from_item(item, energy, difference))
        .collect()
}

// ============================================================================
// TESTS
// ============================================================================
