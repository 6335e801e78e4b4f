use serde::{Deserialize, Serialize};

use crate::core::types::ViewWindow;
use crate::error::{GanttError, GanttResult};

/// Horizontal or vertical pixel span `[min, max)` available to a scale.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PixelRange {
    min: f64,
    max: f64,
}

impl PixelRange {
    /// Degenerate ranges (`min >= max`, non-finite bounds) are rejected rather
    /// than clamped so layout bugs surface at the call site.
    pub fn new(min: f64, max: f64) -> GanttResult<Self> {
        if !min.is_finite() || !max.is_finite() || min >= max {
            return Err(GanttError::InvalidPixelRange { min, max });
        }
        Ok(Self { min, max })
    }

    #[must_use]
    pub fn min(self) -> f64 {
        self.min
    }

    #[must_use]
    pub fn max(self) -> f64 {
        self.max
    }

    #[must_use]
    pub fn span(self) -> f64 {
        self.max - self.min
    }
}

/// Linear mapping from the visible time window to a horizontal pixel span.
///
/// `time_to_pixel(window.offset)` lands on `range.min` and
/// `time_to_pixel(window.end())` on `range.max`. Panning shifts the domain
/// only; resizing swaps the range only.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeScale {
    window: ViewWindow,
    range: PixelRange,
}

impl TimeScale {
    pub fn new(window: ViewWindow, range: PixelRange) -> GanttResult<Self> {
        validate_window(window)?;
        Ok(Self { window, range })
    }

    #[must_use]
    pub fn window(self) -> ViewWindow {
        self.window
    }

    #[must_use]
    pub fn pixel_range(self) -> PixelRange {
        self.range
    }

    /// Shifts the domain after a pan; the pixel range is untouched.
    pub fn set_window(&mut self, window: ViewWindow) -> GanttResult<()> {
        validate_window(window)?;
        self.window = window;
        Ok(())
    }

    /// Swaps the pixel range after a resize; the domain is untouched.
    pub fn set_pixel_range(&mut self, range: PixelRange) {
        self.range = range;
    }

    pub fn time_to_pixel(self, time: f64) -> GanttResult<f64> {
        if !time.is_finite() {
            return Err(GanttError::InvalidSchedule(
                "time value must be finite".to_owned(),
            ));
        }

        let normalized = (time - self.window.offset) / self.window.width;
        Ok(self.range.min() + normalized * self.range.span())
    }

    pub fn pixel_to_time(self, pixel: f64) -> GanttResult<f64> {
        if !pixel.is_finite() {
            return Err(GanttError::InvalidSchedule(
                "pixel value must be finite".to_owned(),
            ));
        }

        let normalized = (pixel - self.range.min()) / self.range.span();
        Ok(self.window.offset + normalized * self.window.width)
    }
}

fn validate_window(window: ViewWindow) -> GanttResult<()> {
    if !window.offset.is_finite() || !window.width.is_finite() || window.width <= 0.0 {
        return Err(GanttError::InvalidSchedule(format!(
            "view window must be finite with width > 0, got offset={} width={}",
            window.offset, window.width
        )));
    }
    Ok(())
}
