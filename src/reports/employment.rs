//! Houston metro sector job change, May 2024 to May 2025.

use std::path::Path;

use crate::derive::{derive_fields, Rule};
use crate::error::Result;
use crate::render::{render_chart, Artifact, ChartKind, ChartSpecBuilder};
use crate::table::{self, Table};

// 15-char display limit for sector names, as on the published chart.
const SECTOR_LABEL_LIMIT: usize = 15;

const SECTOR_JOB_CHANGE: &[(&str, i64, &str)] = &[
    ("Healthcare", 9_700, "Positive"),
    ("Hospitality (Restaurants/Bars)", 9_200, "Positive"),
    ("Healthcare Services", 6_300, "Positive"),
    ("Energy/Oil & Gas", 2_900, "Positive"),
    ("Arts & Entertainment", 2_800, "Positive"),
    ("Hotels", 1_200, "Positive"),
    ("Construction", 400, "Positive"),
    ("Information", -200, "Negative"),
    ("Professional Services", -3_500, "Negative"),
];

fn sector_table() -> Result<Table> {
    let mut table = Table::new("sector_job_change", &["sector", "job_change", "trend"]);
    for (sector, change, trend) in SECTOR_JOB_CHANGE {
        table.push(vec![(*sector).into(), (*change).into(), (*trend).into()])?;
    }
    Ok(table)
}

pub fn generate(out_dir: &Path) -> Result<Vec<Artifact>> {
    info!("Generating employment report");
    let table = derive_fields(
        &sector_table()?,
        &[
            Rule::truncate("sector", SECTOR_LABEL_LIMIT, "sector_short"),
            Rule::abbreviate("job_change", "job_change_display"),
        ],
    )?;
    table::write_csv(&table, &out_dir.join("sector_job_change.csv"))?;

    let spec = ChartSpecBuilder::default()
        .title("Houston Metro Job Change by Sector, May 2024 - May 2025")
        .kind(ChartKind::HBar)
        .category("sector_short")
        .value("job_change")
        .group("trend")
        .build()?;
    let chart = render_chart(
        &table,
        &spec,
        &out_dir.join("houston_sector_job_change.png"),
    )?;
    Ok(vec![chart])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::Value;
    use tempfile::tempdir;

    #[test]
    fn test_sector_labels_fit_display_limit() {
        let table = derive_fields(
            &sector_table().unwrap(),
            &[Rule::truncate("sector", SECTOR_LABEL_LIMIT, "sector_short")],
        )
        .unwrap();
        for row in 0..table.len() {
            let short = table.get(row, "sector_short").unwrap().to_string();
            assert!(!short.is_empty());
            assert!(short.chars().count() <= SECTOR_LABEL_LIMIT);
        }
        assert_eq!(
            table.get(1, "sector_short"),
            Some(&Value::Text("Hospitality (Re".into()))
        );
    }

    #[test]
    fn test_abbreviated_job_change() {
        let table = derive_fields(
            &sector_table().unwrap(),
            &[Rule::abbreviate("job_change", "display")],
        )
        .unwrap();
        assert_eq!(table.get(0, "display"), Some(&Value::Text("10k".into())));
        assert_eq!(table.get(7, "display"), Some(&Value::Text("-200".into())));
    }

    #[test]
    fn test_generate_artifacts() {
        let dir = tempdir().unwrap();
        let artifacts = generate(dir.path()).unwrap();
        assert_eq!(artifacts.len(), 1);
        assert!(dir.path().join("sector_job_change.csv").is_file());
        assert!(dir.path().join("houston_sector_job_change.png").is_file());
    }
}
