mod band_scale;
mod scale;
mod types;

pub use band_scale::BandScale;
pub use scale::{PixelRange, TimeScale};
pub use types::{Color, ScheduleView, TaskInstance, ViewWindow, Viewport};
