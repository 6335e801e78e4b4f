use indexmap::IndexMap;
use smallvec::SmallVec;

use crate::core::{BandScale, TaskInstance, TimeScale};
use crate::error::{GanttError, GanttResult};
use crate::render::primitives::Mark;

/// Stable identity of one rendered mark.
///
/// Task order within a `ScheduleView` is fixed, so the task index is the
/// join key between the task list and the mark arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MarkId(pub usize);

/// Changes one reconcile pass wants applied to the surface.
///
/// Marks whose geometry did not move appear in none of the lists, which is
/// what makes repeated redraws with unchanged inputs visual no-ops.
#[derive(Debug, Default, PartialEq)]
pub struct MarkDelta {
    pub created: SmallVec<[(MarkId, Mark); 8]>,
    pub updated: SmallVec<[(MarkId, Mark); 8]>,
    pub removed: SmallVec<[MarkId; 8]>,
}

impl MarkDelta {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.created.is_empty() && self.updated.is_empty() && self.removed.is_empty()
    }
}

/// Projects every task through the current scales.
///
/// `x` and `width` come straight from the time scale, `y` and `height` from
/// the band scale. No visibility culling happens here.
pub fn project_marks(
    tasks: &[TaskInstance],
    time_scale: &TimeScale,
    band_scale: &BandScale,
) -> GanttResult<Vec<(MarkId, Mark)>> {
    let mut projected = Vec::with_capacity(tasks.len());

    for (index, task) in tasks.iter().enumerate() {
        let x = time_scale.time_to_pixel(task.start_time)?;
        let x_end = time_scale.time_to_pixel(task.start_time + task.execution_time)?;
        let y = band_scale.position(task.processor).ok_or_else(|| {
            GanttError::InvalidSchedule(format!(
                "task `{}` references processor {} outside the band domain",
                task.label, task.processor
            ))
        })?;

        projected.push((
            MarkId(index),
            Mark {
                x,
                y,
                width: x_end - x,
                height: band_scale.bandwidth(),
                fill: task.color,
            },
        ));
    }

    Ok(projected)
}

/// Ownership arena for rendered marks, keyed by task identity.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct MarkStore {
    marks: IndexMap<MarkId, Mark>,
}

impl MarkStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Keyed diff of the projected geometry against the previous pass.
    ///
    /// Present in both sides with moved geometry -> `updated` (identity kept,
    /// no churn). Only in the projection -> `created`. Only in the previous
    /// pass -> `removed`. After this call the store holds exactly the
    /// projected set, in projection order.
    pub fn reconcile(&mut self, projected: Vec<(MarkId, Mark)>) -> MarkDelta {
        let mut next = IndexMap::with_capacity(projected.len());
        let mut delta = MarkDelta::default();

        for (id, mark) in projected {
            match self.marks.swap_remove(&id) {
                Some(previous) if previous == mark => {}
                Some(_) => delta.updated.push((id, mark)),
                None => delta.created.push((id, mark)),
            }
            next.insert(id, mark);
        }

        delta.removed.extend(self.marks.keys().copied());
        self.marks = next;
        delta
    }

    #[must_use]
    pub fn get(&self, id: MarkId) -> Option<&Mark> {
        self.marks.get(&id)
    }

    pub fn iter(&self) -> impl ExactSizeIterator<Item = (MarkId, &Mark)> {
        self.marks.iter().map(|(id, mark)| (*id, mark))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.marks.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.marks.is_empty()
    }
}
