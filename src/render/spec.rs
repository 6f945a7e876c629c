use crate::error::{Error, Result};
use crate::table::Table;

/// Supported chart shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    /// Vertical bars, one per record, categorical axis from `category`.
    Bar,
    /// Horizontal bars, categorical axis on the left.
    HBar,
    /// Lines over a numeric `category` axis (e.g. years).
    Line,
}

/// Field mapping and cosmetics for one chart artifact.
#[derive(Debug, Clone, Builder)]
#[builder(setter(into))]
pub struct ChartSpec {
    /// Chart title, drawn as the caption.
    pub title: String,
    pub kind: ChartKind,
    /// Field providing the category axis.
    pub category: String,
    /// Numeric field providing the value axis.
    pub value: String,
    /// Optional field used to split records into colored series.
    #[builder(setter(strip_option), default)]
    pub group: Option<String>,
    /// Image size in pixels.
    #[builder(default = "(1280, 720)")]
    pub size: (u32, u32),
    /// Category labels longer than this are truncated for display.
    #[builder(default = "24")]
    pub label_limit: usize,
}

impl ChartSpec {
    /// Checks the field mapping against a concrete table. Called before any
    /// backend is opened, so a bad mapping never leaves a file behind.
    pub fn validate(&self, table: &Table) -> Result<()> {
        if table.is_empty() {
            return Err(Error::Render(format!(
                "table '{}' has no records to plot",
                table.name()
            )));
        }
        self.require_field(table, &self.category)?;
        self.require_numeric(table, &self.value)?;
        if let Some(group) = &self.group {
            self.require_field(table, group)?;
        }
        if self.kind == ChartKind::Line {
            self.require_numeric(table, &self.category)?;
        }
        Ok(())
    }

    fn require_field(&self, table: &Table, field: &str) -> Result<()> {
        if table.field_index(field).is_none() {
            return Err(Error::Render(format!(
                "chart '{}': table '{}' has no field '{}'",
                self.title,
                table.name(),
                field
            )));
        }
        Ok(())
    }

    fn require_numeric(&self, table: &Table, field: &str) -> Result<()> {
        self.require_field(table, field)?;
        if table.numeric_column(field).is_err() {
            return Err(Error::Render(format!(
                "chart '{}': field '{}' is not numeric",
                self.title, field
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec(kind: ChartKind) -> ChartSpec {
        ChartSpecBuilder::default()
            .title("Test chart")
            .kind(kind)
            .category("label")
            .value("count")
            .build()
            .unwrap()
    }

    fn table() -> Table {
        let mut table = Table::new("t", &["label", "count"]);
        table.push(vec!["a".into(), 1.into()]).unwrap();
        table.push(vec!["b".into(), 2.into()]).unwrap();
        table
    }

    #[test]
    fn test_builder_defaults() {
        let spec = spec(ChartKind::Bar);
        assert_eq!(spec.size, (1280, 720));
        assert_eq!(spec.label_limit, 24);
        assert!(spec.group.is_none());
    }

    #[test]
    fn test_validate_accepts_good_mapping() {
        assert!(spec(ChartKind::Bar).validate(&table()).is_ok());
        assert!(spec(ChartKind::HBar).validate(&table()).is_ok());
    }

    #[test]
    fn test_validate_rejects_missing_fields() {
        let mut bad = spec(ChartKind::Bar);
        bad.value = "missing".to_string();
        assert!(bad.validate(&table()).is_err());
        let mut bad = spec(ChartKind::Bar);
        bad.category = "missing".to_string();
        assert!(bad.validate(&table()).is_err());
        let mut bad = spec(ChartKind::Bar);
        bad.group = Some("missing".to_string());
        assert!(bad.validate(&table()).is_err());
    }

    #[test]
    fn test_validate_rejects_text_value_axis() {
        let mut bad = spec(ChartKind::Bar);
        bad.value = "label".to_string();
        match bad.validate(&table()) {
            Err(Error::Render(message)) => assert!(message.contains("not numeric")),
            _ => panic!("expected a render error"),
        }
    }

    #[test]
    fn test_validate_line_needs_numeric_category() {
        assert!(spec(ChartKind::Line).validate(&table()).is_err());
        let mut years = Table::new("t", &["label", "count"]);
        years.push(vec![2020.into(), 10.into()]).unwrap();
        assert!(spec(ChartKind::Line).validate(&years).is_ok());
    }

    #[test]
    fn test_validate_empty_table() {
        let empty = Table::new("empty", &["label", "count"]);
        assert!(spec(ChartKind::Bar).validate(&empty).is_err());
    }
}
