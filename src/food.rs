// 🍛 Food Table
// Immutable dataset loaded once at start-up, rows kept as open field maps

use crate::energy::parse_energy_value;
use anyhow::{bail, Context, Result};
use serde::Serialize;
use serde_json::{Map, Number, Value};
use std::io::Read;
use std::path::Path;
use tracing::{debug, info};

/// Default name of the column holding raw energy text
pub const DEFAULT_ENERGY_COLUMN: &str = "nutri_energy";

/// One dataset row.
///
/// Columns are kept as an ordered field map, so any schema passes through
/// untouched. The energy column's raw text is replaced by the parsed kJ value
/// (or null) when the item is built.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct FoodItem {
    fields: Map<String, Value>,
    #[serde(skip)]
    energy: Option<f64>,
}

impl FoodItem {
    /// Build an item from raw fields, parsing `energy_column` into kJ
    pub fn new(mut fields: Map<String, Value>, energy_column: &str) -> Self {
        let energy = fields.get(energy_column).and_then(parse_energy_value);

        let resolved = energy
            .and_then(Number::from_f64)
            .map(Value::Number)
            .unwrap_or(Value::Null);
        fields.insert(energy_column.to_string(), resolved);

        FoodItem { fields, energy }
    }

    /// Parsed energy in kilojoules, `None` when the source text was unparseable
    pub fn energy(&self) -> Option<f64> {
        self.energy
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }
}

/// Ordered, read-only collection of food items
#[derive(Debug, Clone, Default)]
pub struct FoodTable {
    items: Vec<FoodItem>,
    energy_column: String,
}

impl FoodTable {
    pub fn new(items: Vec<FoodItem>, energy_column: impl Into<String>) -> Self {
        FoodTable {
            items,
            energy_column: energy_column.into(),
        }
    }

    pub fn items(&self) -> &[FoodItem] {
        &self.items
    }

    pub fn energy_column(&self) -> &str {
        &self.energy_column
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of rows whose energy text could be parsed
    pub fn parsed_count(&self) -> usize {
        self.items.iter().filter(|item| item.energy.is_some()).count()
    }
}

// ============================================================================
// CSV LOADING
// ============================================================================

pub fn load_csv(csv_path: &Path, energy_column: &str) -> Result<FoodTable> {
    let file = std::fs::File::open(csv_path)
        .with_context(|| format!("Failed to open dataset {}", csv_path.display()))?;

    let table = read_csv(file, energy_column)
        .with_context(|| format!("Failed to load dataset {}", csv_path.display()))?;

    info!(
        path = %csv_path.display(),
        rows = table.len(),
        parsed = table.parsed_count(),
        unparsed = table.len() - table.parsed_count(),
        "Loaded food table"
    );

    Ok(table)
}

/// Read a food table from any CSV source with a header row.
///
/// Every row is kept; rows with unparseable energy are retained with the
/// energy absent.
pub fn read_csv<R: Read>(reader: R, energy_column: &str) -> Result<FoodTable> {
    // Short rows are padded with absent cells instead of failing the load
    let mut rdr = csv::ReaderBuilder::new().flexible(true).from_reader(reader);
    let headers = rdr.headers().context("Failed to read CSV header")?.clone();

    if !headers.iter().any(|h| h == energy_column) {
        bail!("Energy column '{}' not found in CSV header", energy_column);
    }

    let mut items = Vec::new();

    for (index, result) in rdr.records().enumerate() {
        let record = result.with_context(|| format!("Failed to read CSV row {}", index + 1))?;

        let mut fields = Map::new();
        for (column, name) in headers.iter().enumerate() {
            let value = match record.get(column) {
                None => Value::Null,
                Some(cell) if name == energy_column => raw_text(cell),
                Some(cell) => infer_cell(cell),
            };
            fields.insert(name.to_string(), value);
        }

        let item = FoodItem::new(fields, energy_column);
        if item.energy.is_none() {
            debug!(row = index + 1, "Unparseable energy value, row excluded from matching");
        }
        items.push(item);
    }

    Ok(FoodTable::new(items, energy_column))
}

fn raw_text(cell: &str) -> Value {
    if cell.is_empty() {
        Value::Null
    } else {
        Value::String(cell.to_string())
    }
}

/// Empty cells are absent, numeric cells become numbers, the rest stays text
fn infer_cell(cell: &str) -> Value {
    if cell.trim().is_empty() {
        return Value::Null;
    }

    if let Ok(int) = cell.trim().parse::<i64>() {
        return Value::from(int);
    }

    if let Some(number) = cell.trim().parse::<f64>().ok().and_then(Number::from_f64) {
        return Value::Number(number);
    }

    Value::String(cell.to_string())
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn fields(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => Map::new(),
        }
    }

    #[test]
    fn test_food_item_parses_energy_column() {
        let item = FoodItem::new(
            fields(json!({"name": "Dal", "nutri_energy": "916 kJ"})),
            "nutri_energy",
        );

        assert_eq!(item.energy(), Some(916.0));
        assert_eq!(item.get("nutri_energy"), Some(&json!(916.0)));
        assert_eq!(item.get("name"), Some(&json!("Dal")));
    }

    #[test]
    fn test_food_item_unparseable_energy_is_absent() {
        let item = FoodItem::new(
            fields(json!({"name": "Chai", "nutri_energy": "n/a"})),
            "nutri_energy",
        );

        assert_eq!(item.energy(), None);
        assert_eq!(item.get("nutri_energy"), Some(&Value::Null));
    }

    #[test]
    fn test_read_csv_keeps_every_row() {
        let data = "name,cuisine,nutri_energy,prep_time\n\
                    Idli,South Indian,\"1,046 kJ\",20\n\
                    Lassi,,219 kcal,5\n\
                    Paan,Street,unknown,\n";

        let table = read_csv(data.as_bytes(), "nutri_energy").unwrap();

        assert_eq!(table.len(), 3);
        assert_eq!(table.parsed_count(), 2);

        let idli = &table.items()[0];
        assert_eq!(idli.energy(), Some(1046.0));
        assert_eq!(idli.get("prep_time"), Some(&json!(20)));

        let lassi = &table.items()[1];
        assert_eq!(lassi.get("cuisine"), Some(&Value::Null));
        assert!((lassi.energy().unwrap() - 916.296).abs() < 1e-9);

        let paan = &table.items()[2];
        assert_eq!(paan.energy(), None);
        assert_eq!(paan.get("prep_time"), Some(&Value::Null));
    }

    #[test]
    fn test_read_csv_pads_short_rows() {
        let data = "name,course,nutri_energy\n\
                    a,Main,100 kJ\n\
                    b,Main\n\
                    c\n";

        let table = read_csv(data.as_bytes(), "nutri_energy").unwrap();

        assert_eq!(table.len(), 3);
        assert_eq!(table.parsed_count(), 1);

        let b = &table.items()[1];
        assert_eq!(b.get("course"), Some(&json!("Main")));
        assert_eq!(b.get("nutri_energy"), Some(&Value::Null));
        assert_eq!(b.energy(), None);

        let c = &table.items()[2];
        assert_eq!(c.get("course"), Some(&Value::Null));
        assert_eq!(c.fields().len(), 3);
    }

    #[test]
    fn test_na_tokens_stay_text() {
        let data = "name,course,nutri_energy\na,NA,100 kJ\n";

        let table = read_csv(data.as_bytes(), "nutri_energy").unwrap();

        assert_eq!(table.items()[0].get("course"), Some(&json!("NA")));
    }

    #[test]
    fn test_read_csv_preserves_column_order() {
        let data = "zeta,alpha,nutri_energy\nx,y,10 kJ\n";
        let table = read_csv(data.as_bytes(), "nutri_energy").unwrap();

        let keys: Vec<&String> = table.items()[0].fields().keys().collect();
        assert_eq!(keys, ["zeta", "alpha", "nutri_energy"]);
    }

    #[test]
    fn test_read_csv_missing_energy_column() {
        let data = "name,calories\nIdli,100\n";
        let err = read_csv(data.as_bytes(), "nutri_energy").unwrap_err();

        assert!(err.to_string().contains("nutri_energy"));
    }

    #[test]
    fn test_infer_cell() {
        assert_eq!(infer_cell(""), Value::Null);
        assert_eq!(infer_cell("12"), json!(12));
        assert_eq!(infer_cell("2.5"), json!(2.5));
        assert_eq!(infer_cell("Veg"), json!("Veg"));
    }
}
