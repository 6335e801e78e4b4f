mod marks;
mod primitives;
mod surface;

pub use marks::{MarkDelta, MarkId, MarkStore, project_marks};
pub use primitives::{AxisModel, AxisTick, Cursor, Mark};
pub use surface::{RecordingSurface, Surface};
