//! gantt-rs: interactive Gantt rendering for periodic processor schedules.
//!
//! This crate turns an already-computed cyclic schedule (tasks bound to a
//! start time, a duration, and a processor) into a pannable horizontal-bar
//! chart. Rendering is backend-agnostic: the engine emits incremental mark
//! updates through a [`render::Surface`] so hosts decide how pixels land.

pub mod api;
pub mod core;
pub mod error;
pub mod interaction;
pub mod render;
pub mod telemetry;

pub use api::{GanttChart, GanttConfig, Host};
pub use error::{GanttError, GanttResult};
