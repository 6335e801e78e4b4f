mod axis_ticks;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::core::{BandScale, PixelRange, ScheduleView, TimeScale, ViewWindow, Viewport};
use crate::error::{GanttError, GanttResult};
use crate::interaction::{DragPhase, InteractionState, drag_time_delta};
use crate::render::{AxisModel, Cursor, MarkStore, Surface, project_marks};

/// Pixel margins between the viewport edges and the plotting area.
///
/// The bottom margin hosts the time axis, the left margin the processor
/// axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Margins {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Default for Margins {
    fn default() -> Self {
        Self {
            top: 20.0,
            right: 20.0,
            bottom: 30.0,
            left: 40.0,
        }
    }
}

/// Public chart bootstrap configuration.
///
/// Serializable so host applications can persist chart setup without
/// inventing their own ad-hoc format.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GanttConfig {
    pub viewport: Viewport,
    #[serde(default)]
    pub margins: Margins,
}

impl GanttConfig {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            margins: Margins::default(),
        }
    }
}

/// Resolves a mount selector to a rendering surface inside the host
/// document or widget tree.
pub trait Host {
    type Surface: Surface;

    fn resolve(&mut self, selector: &str) -> Option<Self::Surface>;
}

/// The chart engine: owns the view window, both scales, the mark arena, and
/// the drag state machine. The surface only ever sees incremental updates.
pub struct GanttChart<S: Surface> {
    surface: S,
    schedule: ScheduleView,
    config: GanttConfig,
    window: ViewWindow,
    time_scale: TimeScale,
    band_scale: BandScale,
    marks: MarkStore,
    interaction: InteractionState,
    mounted: bool,
}

impl<S: Surface> GanttChart<S> {
    /// Validates the schedule, resolves the container, builds both scales,
    /// and performs the initial draw.
    ///
    /// The visible window starts at `[0, period)`.
    pub fn mount<H>(
        host: &mut H,
        selector: &str,
        schedule: ScheduleView,
        config: GanttConfig,
    ) -> GanttResult<Self>
    where
        H: Host<Surface = S>,
    {
        schedule.validate()?;
        let surface = host
            .resolve(selector)
            .ok_or_else(|| GanttError::ContainerNotFound(selector.to_owned()))?;

        let (x_range, y_range) = inner_ranges(config)?;
        let window = ViewWindow::initial(schedule.period);
        let time_scale = TimeScale::new(window, x_range)?;
        let band_scale = BandScale::from_tasks(&schedule.tasks, y_range);

        let mut chart = Self {
            surface,
            schedule,
            config,
            window,
            time_scale,
            band_scale,
            marks: MarkStore::new(),
            interaction: InteractionState::default(),
            mounted: true,
        };

        chart.surface.set_cursor(Cursor::Grab);
        chart.redraw()?;
        chart.push_axes()?;
        debug!(
            tasks = chart.schedule.tasks.len(),
            processors = chart.band_scale.len(),
            period = chart.schedule.period,
            "chart mounted"
        );
        Ok(chart)
    }

    /// Begins a drag: acquires pointer capture so the gesture survives the
    /// pointer leaving the chart bounds. Redundant downs are absorbed.
    pub fn pointer_down(&mut self, x: f64) {
        if self.interaction.on_pointer_down(x) {
            self.surface.capture_pointer();
            self.surface.set_cursor(Cursor::Grabbing);
        }
    }

    /// Pans the window while dragging; a move while idle is a no-op.
    pub fn pointer_move(&mut self, x: f64) -> GanttResult<()> {
        let Some(dx) = self.interaction.on_pointer_move(x) else {
            return Ok(());
        };

        let delta = drag_time_delta(dx, self.window.width, self.time_scale.pixel_range().span());
        self.window.pan_by(delta);
        self.time_scale.set_window(self.window)?;
        trace!(dx, offset = self.window.offset, "pan");
        self.redraw()?;
        self.push_axes()
    }

    /// Ends a drag through the single release path shared with unmount.
    pub fn pointer_up(&mut self) {
        if self.interaction.on_pointer_up() {
            self.release_drag();
        }
    }

    /// Recomputes pixel ranges for the new viewport and redraws. Fires the
    /// same way whether a drag is in progress or not.
    pub fn resize(&mut self, viewport: Viewport) -> GanttResult<()> {
        if !viewport.is_valid() {
            return Err(GanttError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }

        // Nothing is committed until the candidate layout validates.
        let candidate = GanttConfig {
            viewport,
            ..self.config
        };
        let (x_range, y_range) = inner_ranges(candidate)?;
        self.config = candidate;
        self.time_scale.set_pixel_range(x_range);
        self.band_scale.set_pixel_range(y_range);
        debug!(
            width = viewport.width,
            height = viewport.height,
            "viewport resized"
        );
        self.redraw()?;
        self.push_axes()
    }

    /// Redraw without touching window or scales (the original wheel
    /// handler). With unchanged inputs this emits nothing to the surface.
    pub fn refresh(&mut self) -> GanttResult<()> {
        self.redraw()
    }

    /// Replaces the schedule, rebuilding the processor domain and resetting
    /// the window width to the new period. The pan offset is kept.
    pub fn set_schedule(&mut self, schedule: ScheduleView) -> GanttResult<()> {
        schedule.validate()?;
        debug!(
            tasks = schedule.tasks.len(),
            period = schedule.period,
            "schedule replaced"
        );
        self.window.width = schedule.period;
        self.band_scale.set_domain_from_tasks(&schedule.tasks);
        self.time_scale.set_window(self.window)?;
        self.schedule = schedule;
        self.redraw()?;
        self.push_axes()
    }

    /// Releases pointer capture if a drag is live and detaches from the
    /// surface. Dropping the chart does the same.
    pub fn unmount(mut self) {
        self.teardown();
    }

    #[must_use]
    pub fn window(&self) -> ViewWindow {
        self.window
    }

    #[must_use]
    pub fn drag_phase(&self) -> DragPhase {
        self.interaction.phase()
    }

    #[must_use]
    pub fn marks(&self) -> &MarkStore {
        &self.marks
    }

    #[must_use]
    pub fn schedule(&self) -> &ScheduleView {
        &self.schedule
    }

    #[must_use]
    pub fn config(&self) -> GanttConfig {
        self.config
    }

    #[must_use]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    fn redraw(&mut self) -> GanttResult<()> {
        let projected = project_marks(&self.schedule.tasks, &self.time_scale, &self.band_scale)?;
        let delta = self.marks.reconcile(projected);

        for (id, mark) in &delta.created {
            self.surface.create_mark(*id, *mark)?;
        }
        for (id, mark) in &delta.updated {
            self.surface.update_mark(*id, *mark)?;
        }
        for id in &delta.removed {
            self.surface.remove_mark(*id)?;
        }

        if !delta.is_empty() {
            debug!(
                created = delta.created.len(),
                updated = delta.updated.len(),
                removed = delta.removed.len(),
                "redraw"
            );
        }
        Ok(())
    }

    fn push_axes(&mut self) -> GanttResult<()> {
        let axes = AxisModel {
            time_ticks: axis_ticks::time_axis_ticks(&self.time_scale)?,
            processor_ticks: axis_ticks::processor_axis_ticks(&self.band_scale),
        };
        self.surface.set_axes(&axes)
    }

    fn release_drag(&mut self) {
        self.surface.release_pointer();
        self.surface.set_cursor(Cursor::Grab);
    }

    fn teardown(&mut self) {
        if !self.mounted {
            return;
        }
        self.mounted = false;
        if self.interaction.on_pointer_up() {
            self.release_drag();
        }
        self.surface.detach();
    }
}

impl<S: Surface> Drop for GanttChart<S> {
    fn drop(&mut self) {
        self.teardown();
    }
}

fn inner_ranges(config: GanttConfig) -> GanttResult<(PixelRange, PixelRange)> {
    let viewport = config.viewport;
    if !viewport.is_valid() {
        return Err(GanttError::InvalidViewport {
            width: viewport.width,
            height: viewport.height,
        });
    }

    let margins = config.margins;
    let x_range = PixelRange::new(margins.left, f64::from(viewport.width) - margins.right)?;
    let y_range = PixelRange::new(margins.top, f64::from(viewport.height) - margins.bottom)?;
    Ok((x_range, y_range))
}
