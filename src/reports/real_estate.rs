//! Submarket rental rates by tier and quarterly multifamily market trends
//! for the Houston metro.

use std::path::Path;

use crate::derive::{derive_fields, Rule};
use crate::error::Result;
use crate::render::{render_chart, slug, Artifact, ChartKind, ChartSpecBuilder};
use crate::table::{self, Table};

const SUBMARKET_LABEL_LIMIT: usize = 15;

// Tier-grouped, rent descending within each tier, so the top bar is the
// most expensive submarket.
const SUBMARKET_RENTS: &[(&str, i64, &str)] = &[
    ("University Place", 2618, "Premium"),
    ("The Museum District", 2477, "Premium"),
    ("Neartown-Montrose", 2351, "Premium"),
    ("Downtown Houston", 2346, "Premium"),
    ("Memorial", 2108, "Premium"),
    ("Greater Heights", 1876, "Mid-Tier"),
    ("Energy Corridor", 1559, "Mid-Tier"),
    ("Uptown Houston", 1513, "Mid-Tier"),
    ("Copperfield", 1490, "Mid-Tier"),
    ("Westchase", 1183, "Mid-Tier"),
    ("East Houston", 1145, "Affordable"),
    ("Alief", 1136, "Affordable"),
    ("Gulfton", 1055, "Affordable"),
    ("Sharpstown", 1018, "Affordable"),
];

const QUARTERS: &[(&str, i64, f64, i64)] = &[
    ("Q1 2022", 1220, 87.5, 2100),
    ("Q2 2022", 1235, 88.2, 2800),
    ("Q3 2022", 1245, 88.0, 3200),
    ("Q4 2022", 1250, 87.8, 2400),
    ("Q1 2023", 1265, 88.1, 2160),
    ("Q2 2023", 1275, 88.4, 3400),
    ("Q3 2023", 1285, 88.7, 4100),
    ("Q4 2023", 1295, 89.0, 3600),
    ("Q1 2024", 1310, 89.5, 4200),
    ("Q2 2024", 1335, 91.2, 4800),
    ("Q3 2024", 1350, 92.5, 5200),
    ("Q4 2024", 1360, 93.2, 4900),
    ("Q1 2025", 1367, 94.0, 3595),
    ("Q2 2025", 1370, 93.8, 3800),
];

fn submarket_table() -> Result<Table> {
    let mut table = Table::new("houston_submarket_rents", &["submarket", "avg_rent", "tier"]);
    for (submarket, rent, tier) in SUBMARKET_RENTS {
        table.push(vec![(*submarket).into(), (*rent).into(), (*tier).into()])?;
    }
    Ok(table)
}

fn trends_table() -> Result<Table> {
    let mut table = Table::new(
        "multifamily_trends",
        &["quarter", "avg_rent", "occupancy", "absorption"],
    );
    for (quarter, rent, occupancy, absorption) in QUARTERS {
        table.push(vec![
            (*quarter).into(),
            (*rent).into(),
            (*occupancy).into(),
            (*absorption).into(),
        ])?;
    }
    Ok(table)
}

/// Long-format chart table with the three metrics as one series each, over a
/// numeric year-plus-quarter axis. Occupancy and absorption are rescaled so
/// all three lines share the rent axis; the scale factor is part of the
/// series label.
fn trends_chart_table() -> Result<Table> {
    let mut table = Table::new(
        "multifamily_trend_series",
        &["year_quarter", "series", "value"],
    );
    for (index, (_, rent, occupancy, absorption)) in QUARTERS.iter().enumerate() {
        let t = 2022.0 + index as f64 * 0.25;
        table.push(vec![t.into(), "Avg Rent ($)".into(), (*rent).into()])?;
        table.push(vec![
            t.into(),
            "Occupancy (% x15)".into(),
            (occupancy * 15.0).into(),
        ])?;
        table.push(vec![
            t.into(),
            "Absorption (units/3)".into(),
            (*absorption as f64 / 3.0).into(),
        ])?;
    }
    Ok(table)
}

pub fn generate(out_dir: &Path) -> Result<Vec<Artifact>> {
    info!("Generating real estate report");
    let mut artifacts = Vec::new();

    let submarkets = derive_fields(
        &submarket_table()?,
        &[Rule::truncate(
            "submarket",
            SUBMARKET_LABEL_LIMIT,
            "submarket_short",
        )],
    )?;
    table::write_csv(&submarkets, &out_dir.join("houston_submarket_rents.csv"))?;
    let title = "Houston Rental Rates by Submarket 2025";
    let spec = ChartSpecBuilder::default()
        .title(title)
        .kind(ChartKind::HBar)
        .category("submarket_short")
        .value("avg_rent")
        .group("tier")
        .build()?;
    artifacts.push(render_chart(
        &submarkets,
        &spec,
        &out_dir.join(format!("{}.png", slug(title))),
    )?);

    let trends = trends_table()?;
    table::write_csv(&trends, &out_dir.join("multifamily_trends.csv"))?;
    let title = "Houston Multifamily Market Trends";
    let spec = ChartSpecBuilder::default()
        .title(title)
        .kind(ChartKind::Line)
        .category("year_quarter")
        .value("value")
        .group("series")
        .build()?;
    artifacts.push(render_chart(
        &trends_chart_table()?,
        &spec,
        &out_dir.join(format!("{}.png", slug(title))),
    )?);

    Ok(artifacts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use float_eq::assert_float_eq;
    use tempfile::tempdir;

    #[test]
    fn test_submarket_labels_truncated() {
        let table = derive_fields(
            &submarket_table().unwrap(),
            &[Rule::truncate(
                "submarket",
                SUBMARKET_LABEL_LIMIT,
                "submarket_short",
            )],
        )
        .unwrap();
        let short = table.column("submarket_short").unwrap();
        assert_eq!(short[0].to_string(), "University Plac");
        assert_eq!(short[2].to_string(), "Neartown-Montro");
        for label in &short {
            assert!(label.to_string().chars().count() <= SUBMARKET_LABEL_LIMIT);
        }
    }

    #[test]
    fn test_tiers_are_contiguous_and_ordered() {
        let table = submarket_table().unwrap();
        assert_eq!(table.len(), 14);
        let tiers: Vec<String> = table
            .column("tier")
            .unwrap()
            .iter()
            .map(|v| v.to_string())
            .collect();
        let mut distinct = tiers.clone();
        distinct.dedup();
        assert_eq!(distinct, ["Premium", "Mid-Tier", "Affordable"]);
    }

    #[test]
    fn test_trend_series_scaling() {
        let table = trends_chart_table().unwrap();
        assert_eq!(table.len(), 42);
        let values = table.numeric_column("value").unwrap();
        // Q1 2022: rent raw, occupancy x15, absorption /3
        assert_float_eq!(values[0], 1220.0, abs <= 1e-9);
        assert_float_eq!(values[1], 1312.5, abs <= 1e-9);
        assert_float_eq!(values[2], 700.0, abs <= 1e-9);
        let xs = table.numeric_column("year_quarter").unwrap();
        assert_float_eq!(xs[0], 2022.0, abs <= 1e-9);
        assert_float_eq!(xs[41], 2025.25, abs <= 1e-9);
    }

    #[test]
    fn test_generate_artifacts() {
        let dir = tempdir().unwrap();
        let artifacts = generate(dir.path()).unwrap();
        assert_eq!(artifacts.len(), 2);
        // PNG names come from slugging the chart titles
        for name in &[
            "houston_submarket_rents.csv",
            "multifamily_trends.csv",
            "houston_rental_rates_by_submarket_2025.png",
            "houston_multifamily_market_trends.png",
        ] {
            assert!(dir.path().join(name).is_file(), "missing {}", name);
        }
    }
}
