use crate::core::Color;
use crate::error::{GanttError, GanttResult};

/// Pixel rectangle for one task instance.
///
/// Geometry is emitted for every task, including instances outside the
/// visible window: `x` may be off-canvas and `width` negative when the
/// window has panned past an instance. The surface clips; the engine never
/// culls.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mark {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub fill: Color,
}

impl Mark {
    pub fn validate(self) -> GanttResult<()> {
        if !self.x.is_finite()
            || !self.y.is_finite()
            || !self.width.is_finite()
            || !self.height.is_finite()
        {
            return Err(GanttError::InvalidSchedule(
                "mark geometry must be finite".to_owned(),
            ));
        }
        self.fill.validate()
    }
}

/// One axis label anchored at a pixel position.
#[derive(Debug, Clone, PartialEq)]
pub struct AxisTick {
    pub pixel: f64,
    pub label: String,
}

/// Labels for the bottom time axis and the left processor axis.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AxisModel {
    pub time_ticks: Vec<AxisTick>,
    pub processor_ticks: Vec<AxisTick>,
}

/// Pointer affordance over the chart area.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cursor {
    Grab,
    Grabbing,
}
