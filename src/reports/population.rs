//! Population growth 2020-2025, migration components and suburban county
//! growth for the Houston area.

use std::path::Path;

use crate::derive::{derive_fields, Rule};
use crate::error::Result;
use crate::render::{render_chart, Artifact, ChartKind, ChartSpecBuilder};
use crate::table::{self, Table};

const YEARS: &[i64] = &[2020, 2021, 2022, 2023, 2024, 2025];
const HARRIS_COUNTY: &[i64] = &[
    4_800_000, 4_845_000, 4_890_000, 4_903_000, 5_009_000, 4_943_000,
];
const HOUSTON_METRO: &[i64] = &[
    7_089_000, 7_200_000, 7_341_000, 7_480_000, 7_796_000, 7_800_000,
];

const MIGRATION_2024: &[(&str, i64)] = &[
    ("International Migration", 102_000),
    ("Domestic Migration", -31_000),
    ("Natural Increase (Births-Deaths)", 49_000),
    ("Total Change", 106_000),
];

const SUBURBAN_COUNTIES: &[(&str, i64, f64)] = &[
    ("Montgomery", 774_954, 23.9),
    ("Fort Bend", 972_496, 17.3),
    ("Liberty", 119_892, 29.6),
    ("Waller", 87_000, 18.9),
    ("Brazoria", 420_346, 12.5),
    ("Galveston", 370_458, 5.4),
];

/// Long-format growth table: one record per (year, series) pair so the line
/// chart can color the county and metro series separately.
fn growth_table() -> Result<Table> {
    let mut table = Table::new("harris_population_growth", &["year", "series", "population"]);
    for (year, population) in YEARS.iter().zip(HARRIS_COUNTY) {
        table.push(vec![(*year).into(), "Harris County".into(), (*population).into()])?;
    }
    for (year, population) in YEARS.iter().zip(HOUSTON_METRO) {
        table.push(vec![(*year).into(), "Houston Metro".into(), (*population).into()])?;
    }
    Ok(table)
}

fn migration_table() -> Result<Table> {
    let mut table = Table::new("migration_components", &["component", "people"]);
    for (component, people) in MIGRATION_2024 {
        table.push(vec![(*component).into(), (*people).into()])?;
    }
    Ok(table)
}

fn suburban_table() -> Result<Table> {
    let mut table = Table::new(
        "suburban_growth",
        &["county", "population_2025", "growth_rate"],
    );
    for (county, population, growth) in SUBURBAN_COUNTIES {
        table.push(vec![(*county).into(), (*population).into(), (*growth).into()])?;
    }
    Ok(table)
}

pub fn generate(out_dir: &Path) -> Result<Vec<Artifact>> {
    info!("Generating population report");
    let mut artifacts = Vec::new();

    let growth = growth_table()?;
    table::write_csv(&growth, &out_dir.join("harris_population_growth.csv"))?;
    let spec = ChartSpecBuilder::default()
        .title("Harris County and Houston Metro Population 2020-2025")
        .kind(ChartKind::Line)
        .category("year")
        .value("population")
        .group("series")
        .build()?;
    artifacts.push(render_chart(
        &growth,
        &spec,
        &out_dir.join("harris_population_growth.png"),
    )?);

    // Persist first, then chart from the file on disk; the derived share
    // column rides along in the CSV.
    let migration = derive_fields(
        &migration_table()?,
        &[Rule::percent_of_base(
            "people",
            "component",
            "Total Change",
            "share_of_change",
        )],
    )?;
    let migration_csv = out_dir.join("migration_components.csv");
    table::write_csv(&migration, &migration_csv)?;
    let loaded = table::read_csv(&migration_csv, &["component", "people", "share_of_change"])?;
    let spec = ChartSpecBuilder::default()
        .title("Harris County 2024 Population Change Components")
        .kind(ChartKind::HBar)
        .category("component")
        .value("people")
        .label_limit(28usize)
        .build()?;
    artifacts.push(render_chart(
        &loaded,
        &spec,
        &out_dir.join("migration_components.png"),
    )?);

    let suburban = derive_fields(
        &suburban_table()?,
        &[Rule::abbreviate("population_2025", "population_display")],
    )?;
    table::write_csv(&suburban, &out_dir.join("suburban_growth.csv"))?;
    let spec = ChartSpecBuilder::default()
        .title("Houston Area Suburban County Growth 2020-2025 (%)")
        .kind(ChartKind::Bar)
        .category("county")
        .value("growth_rate")
        .build()?;
    artifacts.push(render_chart(
        &suburban,
        &spec,
        &out_dir.join("suburban_growth.png"),
    )?);

    Ok(artifacts)
}
