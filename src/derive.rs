use crate::error::{Error, Result};
use crate::format;
use crate::table::{Table, Value};

/// A per-table derivation. Rules are pure: `derive_fields` leaves the input
/// table untouched and returns a widened copy.
#[derive(Debug, Clone)]
pub enum Rule {
    /// New field with each value as a percentage of the column total. A zero
    /// (or non-finite) total yields 0.0 for every row instead of an error.
    PercentOfTotal { value: String, as_field: String },
    /// New field with each value as a percentage of the value found in the
    /// first record whose `key_field` equals `key`.
    PercentOfBase {
        value: String,
        key_field: String,
        key: String,
        as_field: String,
    },
    /// New text field with the value abbreviated to a thousands-based unit
    /// (`234k`, `1.2m`).
    Abbreviate { value: String, as_field: String },
    /// New text field with the label cut to at most `limit` characters.
    Truncate {
        field: String,
        limit: usize,
        as_field: String,
    },
}

impl Rule {
    pub fn percent_of_total(value: &str, as_field: &str) -> Rule {
        Rule::PercentOfTotal {
            value: value.to_string(),
            as_field: as_field.to_string(),
        }
    }

    pub fn percent_of_base(value: &str, key_field: &str, key: &str, as_field: &str) -> Rule {
        Rule::PercentOfBase {
            value: value.to_string(),
            key_field: key_field.to_string(),
            key: key.to_string(),
            as_field: as_field.to_string(),
        }
    }

    pub fn abbreviate(value: &str, as_field: &str) -> Rule {
        Rule::Abbreviate {
            value: value.to_string(),
            as_field: as_field.to_string(),
        }
    }

    pub fn truncate(field: &str, limit: usize, as_field: &str) -> Rule {
        Rule::Truncate {
            field: field.to_string(),
            limit,
            as_field: as_field.to_string(),
        }
    }
}

/// Applies `rules` in order and returns the widened table.
pub fn derive_fields(table: &Table, rules: &[Rule]) -> Result<Table> {
    let mut out = table.clone();
    for rule in rules {
        apply(&mut out, rule)?;
    }
    Ok(out)
}

fn apply(table: &mut Table, rule: &Rule) -> Result<()> {
    match rule {
        Rule::PercentOfTotal { value, as_field } => {
            let column = table.numeric_column(value)?;
            let total: f64 = column.iter().sum();
            let values = column
                .iter()
                .map(|v| Value::Float(percent(*v, total)))
                .collect();
            table.add_field(as_field, values)
        }
        Rule::PercentOfBase {
            value,
            key_field,
            key,
            as_field,
        } => {
            let column = table.numeric_column(value)?;
            let keys = table.column(key_field)?;
            let base_row = keys
                .iter()
                .position(|v| v.as_str() == Some(key))
                .ok_or_else(|| {
                    Error::DataFormat(format!(
                        "table '{}': no record with {} = '{}'",
                        table.name(),
                        key_field,
                        key
                    ))
                })?;
            let base = column[base_row];
            let values = column
                .iter()
                .map(|v| Value::Float(percent(*v, base)))
                .collect();
            table.add_field(as_field, values)
        }
        Rule::Abbreviate { value, as_field } => {
            let values = table
                .numeric_column(value)?
                .iter()
                .map(|v| Value::Text(format::abbreviate(*v)))
                .collect();
            table.add_field(as_field, values)
        }
        Rule::Truncate {
            field,
            limit,
            as_field,
        } => {
            let values = table
                .column(field)?
                .iter()
                .map(|v| Value::Text(format::truncate_label(&v.to_string(), *limit)))
                .collect();
            table.add_field(as_field, values)
        }
    }
}

fn percent(value: f64, base: f64) -> f64 {
    if base == 0.0 || !base.is_finite() {
        0.0
    } else {
        100.0 * value / base
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use float_eq::assert_float_eq;

    fn pcts(table: &Table, field: &str) -> Vec<f64> {
        table.numeric_column(field).unwrap()
    }

    #[test]
    fn test_percent_of_total_even_split() {
        let mut table = Table::new("t", &["category", "value"]);
        table.push(vec!["A".into(), 50.into()]).unwrap();
        table.push(vec!["B".into(), 50.into()]).unwrap();
        let derived =
            derive_fields(&table, &[Rule::percent_of_total("value", "pct")]).unwrap();
        assert_eq!(pcts(&derived, "pct"), [50.0, 50.0]);
        // Source table is untouched
        assert_eq!(table.fields(), ["category", "value"]);
    }

    #[test]
    fn test_percent_of_total_sums_to_100() {
        let mut table = Table::new("ages", &["group", "population"]);
        for (group, population) in &[("0-4", 327_107), ("5-17", 898_251), ("18-24", 490_434)] {
            table.push(vec![(*group).into(), (*population).into()]).unwrap();
        }
        let derived =
            derive_fields(&table, &[Rule::percent_of_total("population", "pct")]).unwrap();
        let sum: f64 = pcts(&derived, "pct").iter().sum();
        assert_float_eq!(sum, 100.0, abs <= 1e-9);
    }

    #[test]
    fn test_percent_of_total_zero_total_sentinel() {
        let mut table = Table::new("t", &["value"]);
        table.push(vec![0.into()]).unwrap();
        let derived =
            derive_fields(&table, &[Rule::percent_of_total("value", "pct")]).unwrap();
        assert_eq!(pcts(&derived, "pct"), [0.0]);
    }

    #[test]
    fn test_percent_of_base() {
        let mut table = Table::new("income", &["group", "median"]);
        table.push(vec!["White".into(), 93_060.into()]).unwrap();
        table.push(vec!["Black".into(), 55_900.into()]).unwrap();
        let derived = derive_fields(
            &table,
            &[Rule::percent_of_base("median", "group", "White", "vs_white")],
        )
        .unwrap();
        let values = pcts(&derived, "vs_white");
        assert_float_eq!(values[0], 100.0, abs <= 1e-9);
        assert_float_eq!(values[1], 60.069, abs <= 0.001);
    }

    #[test]
    fn test_percent_of_base_missing_key() {
        let mut table = Table::new("income", &["group", "median"]);
        table.push(vec!["White".into(), 93_060.into()]).unwrap();
        let result = derive_fields(
            &table,
            &[Rule::percent_of_base("median", "group", "Martian", "vs")],
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_abbreviate_rule() {
        let mut table = Table::new("metro", &["year", "population"]);
        table.push(vec![2024.into(), 7_796_000.into()]).unwrap();
        table.push(vec![2020.into(), 850.into()]).unwrap();
        let derived =
            derive_fields(&table, &[Rule::abbreviate("population", "display")]).unwrap();
        assert_eq!(derived.get(0, "display"), Some(&Value::Text("7.8m".into())));
        assert_eq!(derived.get(1, "display"), Some(&Value::Text("850".into())));
    }

    #[test]
    fn test_truncate_rule() {
        let mut table = Table::new("sectors", &["sector"]);
        table.push(vec!["Professional Services".into()]).unwrap();
        table.push(vec!["Hotels".into()]).unwrap();
        let derived =
            derive_fields(&table, &[Rule::truncate("sector", 12, "short")]).unwrap();
        assert_eq!(
            derived.get(0, "short"),
            Some(&Value::Text("Professional".into()))
        );
        assert_eq!(derived.get(1, "short"), Some(&Value::Text("Hotels".into())));
        for row in 0..derived.len() {
            let short = derived.get(row, "short").unwrap().to_string();
            assert!(!short.is_empty() && short.chars().count() <= 12);
        }
    }

    #[test]
    fn test_rule_chain() {
        let mut table = Table::new("t", &["label", "value"]);
        table.push(vec!["Alpha".into(), 75.into()]).unwrap();
        table.push(vec!["Beta".into(), 25.into()]).unwrap();
        let derived = derive_fields(
            &table,
            &[
                Rule::percent_of_total("value", "pct"),
                Rule::truncate("label", 1, "tag"),
            ],
        )
        .unwrap();
        assert_eq!(derived.fields(), ["label", "value", "pct", "tag"]);
        assert_eq!(pcts(&derived, "pct"), [75.0, 25.0]);
    }

    #[test]
    fn test_missing_value_field() {
        let table = Table::new("t", &["label"]);
        assert!(derive_fields(&table, &[Rule::percent_of_total("value", "pct")]).is_err());
    }
}
