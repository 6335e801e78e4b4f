use serde::{Deserialize, Serialize};

use crate::error::{GanttError, GanttResult};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }
}

/// RGBA color in normalized 0..=1 channel values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    #[must_use]
    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    /// Parses a `#rrggbb` or `#rrggbbaa` string as emitted by schedule tooling.
    pub fn from_hex(hex: &str) -> GanttResult<Self> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if !digits.is_ascii() || (digits.len() != 6 && digits.len() != 8) {
            return Err(GanttError::InvalidSchedule(format!(
                "color `{hex}` must be #rrggbb or #rrggbbaa"
            )));
        }

        let channel = |range: std::ops::Range<usize>| -> GanttResult<f64> {
            u8::from_str_radix(&digits[range], 16)
                .map(|byte| f64::from(byte) / 255.0)
                .map_err(|_| {
                    GanttError::InvalidSchedule(format!("color `{hex}` has non-hex digits"))
                })
        };

        let alpha = if digits.len() == 8 { channel(6..8)? } else { 1.0 };
        Ok(Self::rgba(channel(0..2)?, channel(2..4)?, channel(4..6)?, alpha))
    }

    pub fn validate(self) -> GanttResult<()> {
        for (name, value) in [
            ("red", self.red),
            ("green", self.green),
            ("blue", self.blue),
            ("alpha", self.alpha),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(GanttError::InvalidSchedule(format!(
                    "color channel `{name}` must be finite and in [0, 1]"
                )));
            }
        }
        Ok(())
    }
}

/// One concrete occurrence of a task on one processor within a schedule
/// repetition. Owned by the caller and immutable once handed over.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskInstance {
    pub start_time: f64,
    pub execution_time: f64,
    pub processor: u32,
    pub label: String,
    pub color: Color,
}

/// A fully solved periodic schedule as produced by external scheduling tools.
///
/// `period` is the repeat length of the schedule and defines the initially
/// visible time window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleView {
    pub period: f64,
    pub tasks: Vec<TaskInstance>,
}

impl ScheduleView {
    #[must_use]
    pub fn new(period: f64, tasks: Vec<TaskInstance>) -> Self {
        Self { period, tasks }
    }

    /// Builds a view from a solver throughput value (`period = 1 / throughput`).
    #[must_use]
    pub fn from_throughput(throughput: f64, tasks: Vec<TaskInstance>) -> Self {
        Self {
            period: 1.0 / throughput,
            tasks,
        }
    }

    /// Rejects degenerate schedules before any geometry is derived from them.
    pub fn validate(&self) -> GanttResult<()> {
        if !self.period.is_finite() || self.period <= 0.0 {
            return Err(GanttError::InvalidSchedule(format!(
                "period must be finite and > 0, got {}",
                self.period
            )));
        }

        for task in &self.tasks {
            if !task.start_time.is_finite() {
                return Err(GanttError::InvalidSchedule(format!(
                    "task `{}` has non-finite start time",
                    task.label
                )));
            }
            if !task.execution_time.is_finite() || task.execution_time <= 0.0 {
                return Err(GanttError::InvalidSchedule(format!(
                    "task `{}` must have execution time > 0, got {}",
                    task.label, task.execution_time
                )));
            }
            task.color.validate()?;
        }

        Ok(())
    }
}

/// The currently visible time span `[offset, offset + width)`.
///
/// `width` stays equal to the schedule period for the lifetime of a chart;
/// only panning moves `offset`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewWindow {
    pub offset: f64,
    pub width: f64,
}

impl ViewWindow {
    #[must_use]
    pub fn initial(period: f64) -> Self {
        Self {
            offset: 0.0,
            width: period,
        }
    }

    #[must_use]
    pub fn end(self) -> f64 {
        self.offset + self.width
    }

    pub fn pan_by(&mut self, delta_time: f64) {
        self.offset += delta_time;
    }
}
