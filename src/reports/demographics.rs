//! Harris County 2025 age distribution, grouped by generation.

use std::path::Path;

use crate::derive::{derive_fields, Rule};
use crate::error::Result;
use crate::render::{render_chart, Artifact, ChartKind, ChartSpecBuilder};
use crate::table::{self, Table};

const AGE_GROUPS: &[(&str, i64, &str)] = &[
    ("0-4", 327_107, "Generation Alpha"),
    ("5-9", 337_232, "Generation Alpha"),
    ("10-14", 352_520, "Generation Alpha"),
    ("15-17", 208_209, "Generation Alpha"),
    ("18-20", 215_445, "Generation Z"),
    ("21-24", 274_989, "Generation Z"),
    ("25-34", 719_305, "Millennials"),
    ("35-44", 719_632, "Millennials"),
    ("45-54", 620_281, "Generation X"),
    ("55-64", 527_096, "Generation X"),
    ("65-74", 387_404, "Baby Boomers"),
    ("75-84", 185_835, "Baby Boomers"),
    ("85+", 57_651, "Silent Generation"),
];

fn age_table() -> Result<Table> {
    let mut table = Table::new(
        "age_demographics",
        &["age_group", "population", "generation"],
    );
    for (age_group, population, generation) in AGE_GROUPS {
        table.push(vec![
            (*age_group).into(),
            (*population).into(),
            (*generation).into(),
        ])?;
    }
    Ok(table)
}

pub fn generate(out_dir: &Path) -> Result<Vec<Artifact>> {
    info!("Generating demographics report");
    let table = derive_fields(
        &age_table()?,
        &[
            Rule::percent_of_total("population", "percent"),
            Rule::abbreviate("population", "population_display"),
        ],
    )?;
    table::write_csv(&table, &out_dir.join("age_demographics.csv"))?;

    let spec = ChartSpecBuilder::default()
        .title("Harris County Age by Generation 2025")
        .kind(ChartKind::Bar)
        .category("age_group")
        .value("population")
        .group("generation")
        .build()?;
    let chart = render_chart(
        &table,
        &spec,
        &out_dir.join("harris_county_demographics.png"),
    )?;
    Ok(vec![chart])
}

#[cfg(test)]
mod tests {
    use super::*;
    use float_eq::assert_float_eq;
    use tempfile::tempdir;

    #[test]
    fn test_age_table_partition() {
        let table = derive_fields(
            &age_table().unwrap(),
            &[Rule::percent_of_total("population", "percent")],
        )
        .unwrap();
        let sum: f64 = table.numeric_column("percent").unwrap().iter().sum();
        assert_float_eq!(sum, 100.0, abs <= 1e-9);
    }

    #[test]
    fn test_generate_artifacts() {
        let dir = tempdir().unwrap();
        let artifacts = generate(dir.path()).unwrap();
        assert_eq!(artifacts.len(), 1);
        assert!(dir.path().join("harris_county_demographics.png").is_file());
        let saved = table::read_csv(
            &dir.path().join("age_demographics.csv"),
            &["age_group", "population", "generation", "percent"],
        )
        .unwrap();
        assert_eq!(saved.len(), 13);
    }
}
