use plotters::coord::Shift;
use plotters::prelude::*;

use crate::error::Result;
use crate::format::Magnitude;
use crate::render::{group_series, palette_color, to_render, ChartSpec};
use crate::table::Table;

/// Lines over a numeric category axis (years, typically), one line per group.
pub(super) fn draw<DB>(
    root: &DrawingArea<DB, Shift>,
    table: &Table,
    spec: &ChartSpec,
) -> Result<()>
where
    DB: DrawingBackend,
    DB::ErrorType: 'static,
{
    root.fill(&WHITE).map_err(to_render)?;
    let xs = table.numeric_column(&spec.category)?;
    let values = table.numeric_column(&spec.value)?;
    let (y_min, y_max) = super::value_bounds(&values);
    let magnitude = Magnitude::for_value(y_max.abs().max(y_min.abs()));
    let series = group_series(table, spec)?;

    let x_lo = xs.iter().cloned().fold(f64::INFINITY, f64::min);
    let x_hi = xs.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    let x_pad = ((x_hi - x_lo) * 0.05).max(0.5);
    // Year axes get whole labels, quarter fractions keep their decimals
    let x_decimals = if xs.iter().all(|x| x.fract() == 0.0) { 0 } else { 2 };

    let mut chart = ChartBuilder::on(root)
        .caption(&spec.title, ("sans-serif", 28))
        .margin(20)
        .set_label_area_size(LabelAreaPosition::Left, 80)
        .set_label_area_size(LabelAreaPosition::Bottom, 50)
        .build_cartesian_2d(x_lo - x_pad..x_hi + x_pad, y_min..y_max)
        .map_err(to_render)?;

    chart
        .configure_mesh()
        .x_label_formatter(&|x| format!("{:.*}", x_decimals, x))
        .y_label_formatter(&|y| magnitude.format(*y))
        .label_style(("sans-serif", 16))
        .draw()
        .map_err(to_render)?;

    for (index, (label, points)) in series.iter().enumerate() {
        let color = palette_color(index);
        let coords: Vec<(f64, f64)> = points.iter().map(|(i, v)| (xs[*i], *v)).collect();
        let annotated = chart
            .draw_series(LineSeries::new(coords.iter().cloned(), color.stroke_width(3)))
            .map_err(to_render)?;
        if !label.is_empty() {
            annotated.label(label).legend(move |(x, y)| {
                PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(3))
            });
        }
        chart
            .draw_series(
                coords
                    .iter()
                    .map(|(x, y)| Circle::new((*x, *y), 4, color.filled())),
            )
            .map_err(to_render)?;
    }

    if spec.group.is_some() {
        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::UpperLeft)
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .label_font(("sans-serif", 16))
            .draw()
            .map_err(to_render)?;
    }
    Ok(())
}
