use indexmap::IndexMap;

use crate::error::GanttResult;
use crate::render::marks::MarkId;
use crate::render::primitives::{AxisModel, Cursor, Mark};

/// Contract implemented by any rendering host.
///
/// The engine hands over incremental mark changes instead of full frames so
/// a redraw costs the host work proportional to what actually moved.
/// Pointer capture mirrors document-level drag listeners: acquired on drag
/// start, released through the same teardown path on drag end and unmount.
pub trait Surface {
    fn create_mark(&mut self, id: MarkId, mark: Mark) -> GanttResult<()>;
    fn update_mark(&mut self, id: MarkId, mark: Mark) -> GanttResult<()>;
    fn remove_mark(&mut self, id: MarkId) -> GanttResult<()>;

    /// Replaces both axis label sets; called on mount, pan, and resize.
    fn set_axes(&mut self, axes: &AxisModel) -> GanttResult<()>;

    fn set_cursor(&mut self, cursor: Cursor);

    /// Routes pointer-move/up to the chart even outside its bounds.
    fn capture_pointer(&mut self);
    fn release_pointer(&mut self);

    /// Final teardown; no calls arrive after this.
    fn detach(&mut self);
}

/// In-memory surface used by tests and headless engine usage.
///
/// It validates incoming geometry so tests catch non-finite marks before a
/// real backend is introduced, and keeps counters for churn assertions.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    marks: IndexMap<MarkId, Mark>,
    pub axes: AxisModel,
    pub cursor: Option<Cursor>,
    pub pointer_captured: bool,
    pub detached: bool,
    pub created_count: usize,
    pub updated_count: usize,
    pub removed_count: usize,
}

impl RecordingSurface {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn mark(&self, id: MarkId) -> Option<&Mark> {
        self.marks.get(&id)
    }

    #[must_use]
    pub fn mark_count(&self) -> usize {
        self.marks.len()
    }
}

impl Surface for RecordingSurface {
    fn create_mark(&mut self, id: MarkId, mark: Mark) -> GanttResult<()> {
        mark.validate()?;
        self.marks.insert(id, mark);
        self.created_count += 1;
        Ok(())
    }

    fn update_mark(&mut self, id: MarkId, mark: Mark) -> GanttResult<()> {
        mark.validate()?;
        self.marks.insert(id, mark);
        self.updated_count += 1;
        Ok(())
    }

    fn remove_mark(&mut self, id: MarkId) -> GanttResult<()> {
        self.marks.swap_remove(&id);
        self.removed_count += 1;
        Ok(())
    }

    fn set_axes(&mut self, axes: &AxisModel) -> GanttResult<()> {
        self.axes = axes.clone();
        Ok(())
    }

    fn set_cursor(&mut self, cursor: Cursor) {
        self.cursor = Some(cursor);
    }

    fn capture_pointer(&mut self) {
        self.pointer_captured = true;
    }

    fn release_pointer(&mut self) {
        self.pointer_captured = false;
    }

    fn detach(&mut self) {
        self.detached = true;
    }
}
