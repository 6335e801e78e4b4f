use crate::core::{BandScale, TimeScale};
use crate::error::GanttResult;
use crate::render::AxisTick;

pub(super) const AXIS_TIME_TARGET_SPACING_PX: f64 = 72.0;
pub(super) const AXIS_TIME_MIN_TICKS: usize = 2;
pub(super) const AXIS_TIME_MAX_TICKS: usize = 11;

pub(super) fn axis_tick_target_count(
    axis_span_px: f64,
    target_spacing_px: f64,
    min_ticks: usize,
    max_ticks: usize,
) -> usize {
    if !axis_span_px.is_finite() || axis_span_px <= 0.0 {
        return min_ticks;
    }
    if !target_spacing_px.is_finite() || target_spacing_px <= 0.0 {
        return min_ticks;
    }

    let raw = (axis_span_px / target_spacing_px).floor() as usize + 1;
    raw.clamp(min_ticks, max_ticks)
}

/// Evenly spaced ticks over the visible window, re-derived on every pan and
/// resize so labels track the panned domain.
pub(super) fn time_axis_ticks(scale: &TimeScale) -> GanttResult<Vec<AxisTick>> {
    let window = scale.window();
    let count = axis_tick_target_count(
        scale.pixel_range().span(),
        AXIS_TIME_TARGET_SPACING_PX,
        AXIS_TIME_MIN_TICKS,
        AXIS_TIME_MAX_TICKS,
    );

    let denominator = (count - 1) as f64;
    let mut ticks = Vec::with_capacity(count);
    for index in 0..count {
        let time = window.offset + window.width * (index as f64) / denominator;
        ticks.push(AxisTick {
            pixel: scale.time_to_pixel(time)?,
            label: format_time_label(time),
        });
    }
    Ok(ticks)
}

/// One label per processor, centered in its band.
pub(super) fn processor_axis_ticks(scale: &BandScale) -> Vec<AxisTick> {
    scale
        .domain()
        .filter_map(|id| {
            scale.position(id).map(|top| AxisTick {
                pixel: top + scale.bandwidth() / 2.0,
                label: id.to_string(),
            })
        })
        .collect()
}

fn format_time_label(value: f64) -> String {
    let rounded = (value * 100.0).round() / 100.0;
    if rounded == rounded.trunc() {
        format!("{rounded:.0}")
    } else {
        format!("{rounded}")
    }
}
