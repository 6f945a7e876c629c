//! Income and wealth demographics: median income by race-ethnicity and the
//! highest-income zip codes in the Houston metro.

use std::path::Path;

use crate::derive::{derive_fields, Rule};
use crate::error::Result;
use crate::render::{render_chart, Artifact, ChartKind, ChartSpecBuilder};
use crate::table::{self, Table};

const WHITE_NON_HISPANIC: &str = "White (Non-Hispanic)";

const INCOME_BY_RACE: &[(&str, i64, i64)] = &[
    ("All Households", 71_811, 106_576),
    (WHITE_NON_HISPANIC, 93_060, 113_969),
    ("Black/African American", 55_900, 73_118),
    ("Asian", 98_032, 115_714),
    ("Hispanic/Latino", 63_594, 79_531),
    ("Native American/Alaskan Native", 64_151, 82_820),
    ("Some Other Race", 56_569, 71_221),
    ("2+ Races", 69_706, 88_527),
];

const TOP_ZIP_CODES: &[(&str, i64, &str)] = &[
    ("77010", 221_776, "Medical Center"),
    ("77005", 213_059, "West University"),
    ("77094", 179_387, "Cinco Ranch"),
    ("77059", 158_958, "Clear Lake"),
    ("77046", 145_567, "Galleria"),
    ("77008", 140_609, "Heights"),
    ("77007", 140_536, "Heights"),
    ("77024", 132_710, "Memorial"),
    ("77019", 118_172, "River Oaks"),
    ("77018", 111_524, "Heights"),
];

fn race_table() -> Result<Table> {
    let mut table = Table::new(
        "income_by_race_ethnicity",
        &["race_ethnicity", "median_income", "average_income"],
    );
    for (group, median, average) in INCOME_BY_RACE {
        table.push(vec![(*group).into(), (*median).into(), (*average).into()])?;
    }
    Ok(table)
}

fn zip_table() -> Result<Table> {
    let mut table = Table::new(
        "top_income_zip_codes",
        &["zip_code", "median_household_income", "area"],
    );
    for (zip, income, area) in TOP_ZIP_CODES {
        table.push(vec![(*zip).into(), (*income).into(), (*area).into()])?;
    }
    Ok(table)
}

pub fn generate(out_dir: &Path) -> Result<Vec<Artifact>> {
    info!("Generating income report");
    let mut artifacts = Vec::new();

    let race = derive_fields(
        &race_table()?,
        &[Rule::percent_of_base(
            "median_income",
            "race_ethnicity",
            WHITE_NON_HISPANIC,
            "vs_white_median",
        )],
    )?;
    table::write_csv(&race, &out_dir.join("income_by_race_ethnicity.csv"))?;
    let spec = ChartSpecBuilder::default()
        .title("Harris County Median Household Income by Race-Ethnicity")
        .kind(ChartKind::Bar)
        .category("race_ethnicity")
        .value("median_income")
        .label_limit(14usize)
        .build()?;
    artifacts.push(render_chart(
        &race,
        &spec,
        &out_dir.join("median_income_by_race.png"),
    )?);

    let zips = derive_fields(
        &zip_table()?,
        &[Rule::abbreviate("median_household_income", "income_display")],
    )?;
    table::write_csv(&zips, &out_dir.join("top_income_zip_codes.csv"))?;
    let spec = ChartSpecBuilder::default()
        .title("Highest-Income Zip Codes, Houston Metro")
        .kind(ChartKind::HBar)
        .category("zip_code")
        .value("median_household_income")
        .build()?;
    artifacts.push(render_chart(
        &zips,
        &spec,
        &out_dir.join("top_income_zip_codes.png"),
    )?);

    Ok(artifacts)
}
