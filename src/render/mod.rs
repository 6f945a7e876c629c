pub use self::spec::{ChartKind, ChartSpec, ChartSpecBuilder, ChartSpecBuilderError};

mod backend;
mod bar;
mod hbar;
mod line;
mod spec;

use std::path::{Path, PathBuf};

use plotters::prelude::*;
use regex::Regex;

use self::backend::FontTolerantBackend;
use crate::error::{Error, Result};
use crate::format;
use crate::table::Table;

// Brand palette used across all report charts, cycled per series.
pub(crate) const PALETTE: &[RGBColor] = &[
    RGBColor(0x1f, 0xb8, 0xcd),
    RGBColor(0xff, 0xc1, 0x85),
    RGBColor(0xec, 0xeb, 0xd5),
    RGBColor(0x5d, 0x87, 0x8f),
    RGBColor(0xd2, 0xba, 0x4c),
    RGBColor(0xb4, 0x41, 0x3c),
];

/// A chart image written to disk.
#[derive(Debug, Clone, PartialEq)]
pub struct Artifact {
    pub path: PathBuf,
}

/// Validates the field mapping, draws the chart and writes a PNG at `path`,
/// overwriting any existing file. A mapping error leaves no file behind.
pub fn render_chart(table: &Table, spec: &ChartSpec, path: &Path) -> Result<Artifact> {
    spec.validate(table)?;
    let backend = FontTolerantBackend::new(BitMapBackend::new(path, spec.size));
    let root = backend.into_drawing_area();
    match spec.kind {
        ChartKind::Bar => bar::draw(&root, table, spec)?,
        ChartKind::HBar => hbar::draw(&root, table, spec)?,
        ChartKind::Line => line::draw(&root, table, spec)?,
    }
    root.present().map_err(to_render)?;
    info!("Rendered '{}' to {}", spec.title, path.display());
    Ok(Artifact {
        path: path.to_path_buf(),
    })
}

/// Deterministic file stem for a chart title (`"Top Zip Codes"` becomes
/// `top_zip_codes`).
pub fn slug(title: &str) -> String {
    let re = Regex::new("[^a-z0-9]+").unwrap();
    re.replace_all(&title.to_lowercase(), "_")
        .trim_matches('_')
        .to_string()
}

pub(crate) fn to_render<E: std::fmt::Display>(error: E) -> Error {
    Error::Render(error.to_string())
}

pub(crate) fn palette_color(index: usize) -> RGBColor {
    PALETTE[index % PALETTE.len()]
}

/// Display labels for the category axis, truncated per the spec.
pub(crate) fn label_column(table: &Table, spec: &ChartSpec) -> Result<Vec<String>> {
    Ok(table
        .column(&spec.category)?
        .iter()
        .map(|v| format::truncate_label(&v.to_string(), spec.label_limit))
        .collect())
}

/// Splits records into `(group label, [(row index, value)])` series in first
/// appearance order. Ungrouped charts yield a single unnamed series.
pub(crate) fn group_series(table: &Table, spec: &ChartSpec) -> Result<Vec<(String, Vec<(usize, f64)>)>> {
    let values = table.numeric_column(&spec.value)?;
    let group = match &spec.group {
        None => {
            return Ok(vec![(
                String::new(),
                values.into_iter().enumerate().collect(),
            )])
        }
        Some(field) => table.column(field)?,
    };
    let mut series: Vec<(String, Vec<(usize, f64)>)> = Vec::new();
    for (index, (label, value)) in group.iter().zip(values).enumerate() {
        let label = label.to_string();
        match series.iter_mut().find(|(l, _)| *l == label) {
            Some((_, points)) => points.push((index, value)),
            None => series.push((label, vec![(index, value)])),
        }
    }
    Ok(series)
}

/// Value axis bounds padded away from the data, always including zero so bar
/// lengths stay comparable.
pub(crate) fn value_bounds(values: &[f64]) -> (f64, f64) {
    let min = values.iter().cloned().fold(f64::INFINITY, f64::min).min(0.0);
    let max = values
        .iter()
        .cloned()
        .fold(f64::NEG_INFINITY, f64::max)
        .max(0.0);
    let pad = ((max - min) * 0.1).max(1.0);
    let lo = if min < 0.0 { min - pad } else { min };
    let hi = if max > 0.0 { max + pad } else { max };
    // Degenerate all-zero column still needs a non-empty axis
    if hi > lo {
        (lo, hi)
    } else {
        (lo, lo + 1.0)
    }
}
