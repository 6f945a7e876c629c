use plotters::coord::Shift;
use plotters::prelude::*;

use crate::error::Result;
use crate::format::Magnitude;
use crate::render::{group_series, label_column, palette_color, to_render, ChartSpec};
use crate::table::Table;

/// Horizontal bars with the category labels on the left. The first record
/// ends up as the top bar, matching the table order.
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
    let labels = label_column(table, spec)?;
    let values = table.numeric_column(&spec.value)?;
    let (x_min, x_max) = super::value_bounds(&values);
    let magnitude = Magnitude::for_value(x_max.abs().max(x_min.abs()));
    let series = group_series(table, spec)?;
    let count = labels.len() as u32;
    // Row 0 goes to the highest segment so the table reads top-down.
    let flip = |i: usize| count - 1 - i as u32;

    let mut chart = ChartBuilder::on(root)
        .caption(&spec.title, ("sans-serif", 28))
        .margin(20)
        .set_label_area_size(LabelAreaPosition::Left, 170)
        .set_label_area_size(LabelAreaPosition::Bottom, 50)
        .build_cartesian_2d(x_min..x_max, (0..count).into_segmented())
        .map_err(to_render)?;

    chart
        .configure_mesh()
        .disable_y_mesh()
        .y_labels(labels.len())
        .y_label_formatter(&|y| segment_label(y, &labels, count))
        .x_label_formatter(&|x| magnitude.format(*x))
        .label_style(("sans-serif", 16))
        .draw()
        .map_err(to_render)?;

    for (index, (label, points)) in series.iter().enumerate() {
        let color = palette_color(index);
        let bars = Histogram::horizontal(&chart)
            .style(color.filled())
            .margin(6)
            .data(points.iter().map(|(i, v)| (flip(*i), *v)));
        let annotated = chart.draw_series(bars).map_err(to_render)?;
        if !label.is_empty() {
            annotated.label(label).legend(move |(x, y)| {
                Rectangle::new([(x, y - 6), (x + 12, y + 6)], color.filled())
            });
        }
    }

    if spec.group.is_some() {
        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::LowerRight)
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .label_font(("sans-serif", 16))
            .draw()
            .map_err(to_render)?;
    }
    Ok(())
}

fn segment_label(y: &SegmentValue<u32>, labels: &[String], count: u32) -> String {
    match y {
        SegmentValue::CenterOf(i) | SegmentValue::Exact(i) if *i < count => {
            labels[(count - 1 - i) as usize].clone()
        }
        _ => String::new(),
    }
}
