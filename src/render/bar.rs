use plotters::coord::Shift;
use plotters::prelude::*;

use crate::error::Result;
use crate::format::Magnitude;
use crate::render::{group_series, label_column, palette_color, to_render, ChartSpec};
use crate::table::Table;

/// Vertical bars over a categorical axis, one color per group.
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
    let (y_min, y_max) = super::value_bounds(&values);
    let magnitude = Magnitude::for_value(y_max.abs().max(y_min.abs()));
    let series = group_series(table, spec)?;
    let count = labels.len() as u32;

    let mut chart = ChartBuilder::on(root)
        .caption(&spec.title, ("sans-serif", 28))
        .margin(20)
        .set_label_area_size(LabelAreaPosition::Left, 80)
        .set_label_area_size(LabelAreaPosition::Bottom, 60)
        .build_cartesian_2d((0..count).into_segmented(), y_min..y_max)
        .map_err(to_render)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(labels.len())
        .x_label_formatter(&|x| segment_label(x, &labels))
        .y_label_formatter(&|y| magnitude.format(*y))
        .label_style(("sans-serif", 16))
        .draw()
        .map_err(to_render)?;

    for (index, (label, points)) in series.iter().enumerate() {
        let color = palette_color(index);
        let bars = Histogram::vertical(&chart)
            .style(color.filled())
            .margin(6)
            .data(points.iter().map(|(i, v)| (*i as u32, *v)));
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
            .position(SeriesLabelPosition::UpperRight)
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .label_font(("sans-serif", 16))
            .draw()
            .map_err(to_render)?;
    }
    Ok(())
}

fn segment_label(x: &SegmentValue<u32>, labels: &[String]) -> String {
    match x {
        SegmentValue::CenterOf(i) | SegmentValue::Exact(i) => {
            labels.get(*i as usize).cloned().unwrap_or_default()
        }
        SegmentValue::Last => String::new(),
    }
}
