use crate::config::TimelineConfig;
use crate::layout::{
    BarNode, BarPlacement, DayLabel, GridLine, MonthLabel, Scene, YearGrid, apply_density,
    build_grid, map_bars,
};
use crate::surface::{PointerEvent, Surface, SurfaceProvider};
use crate::task::Task;
use chrono::{Datelike, Local, NaiveDate};
use thiserror::Error;

// Vertical inset of a bar inside its row.
const BAR_VPAD: f32 = 5.0;
const MONTH_LABEL_PAD: f32 = 4.0;

#[derive(Debug, Error)]
pub enum MountError {
    #[error("container not found: no surface matches {selector:?}")]
    ContainerNotFound { selector: String },
    #[error("cannot chart year {year}: outside the supported calendar range")]
    YearOutOfRange { year: i32 },
}

/// Pointer interaction phase. `Dragging` remembers where the pointer was
/// last seen so each move applies only the distance travelled since.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragState {
    Idle,
    Dragging { anchor_x: f32 },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutState {
    pub year: i32,
    pub day_width: f32,
    pub viewport_scroll: f32,
    pub drag: DragState,
}

/// A mounted year timeline: owns its surface, rebuilds the grid on zoom,
/// and maps tasks onto day cells.
#[derive(Debug)]
pub struct TimelineChart<S: Surface> {
    state: LayoutState,
    today: NaiveDate,
    tasks: Vec<Task>,
    config: TimelineConfig,
    grid: YearGrid,
    placements: Vec<BarPlacement>,
    scene: Scene,
    surface: S,
}

impl<S: Surface> TimelineChart<S> {
    /// Claims the surface registered under `selector` and builds the first
    /// frame. When today falls inside `year` the viewport starts centered
    /// on it. Years the calendar cannot represent fail without claiming
    /// the surface.
    pub fn mount<P>(
        provider: &mut P,
        selector: &str,
        year: i32,
        tasks: Vec<Task>,
        config: TimelineConfig,
    ) -> Result<Self, MountError>
    where
        P: SurfaceProvider<Surface = S>,
    {
        // Rejected before the surface is claimed so a failed mount leaves
        // it with the host.
        if NaiveDate::from_ymd_opt(year, 1, 1).is_none() {
            return Err(MountError::YearOutOfRange { year });
        }
        let Some(surface) = provider.acquire(selector) else {
            return Err(MountError::ContainerNotFound {
                selector: selector.to_string(),
            });
        };
        let today = config
            .today
            .unwrap_or_else(|| Local::now().date_naive());
        let day_width = clamp_day_width(config.initial_day_width, &config);
        let mut chart = Self {
            state: LayoutState {
                year,
                day_width,
                viewport_scroll: 0.0,
                drag: DragState::Idle,
            },
            today,
            tasks,
            config,
            grid: YearGrid {
                year,
                day_width,
                months: Vec::new(),
                days: Vec::new(),
            },
            placements: Vec::new(),
            scene: Scene::new(year, day_width),
            surface,
        };
        chart.rebuild();
        chart.center_on_today();
        Ok(chart)
    }

    /// Rebuilds grid, bars, and scene from scratch and presents the frame.
    /// Every zoom change funnels through here so stale cells never survive
    /// a day-width change.
    pub fn rebuild(&mut self) {
        let mut grid = build_grid(self.state.year, self.state.day_width, self.today);
        grid.days = apply_density(grid.days, self.state.day_width, &self.config);
        self.placements = map_bars(&self.tasks, &grid);
        self.grid = grid;
        self.scene = self.assemble_scene();
        self.present();
        log::debug!(
            "rebuilt year {} at {:.2}px/day: {} tasks, {} placed",
            self.state.year,
            self.state.day_width,
            self.tasks.len(),
            self.placements.iter().filter(|p| !p.is_clipped()).count()
        );
    }

    fn assemble_scene(&self) -> Scene {
        let config = &self.config;
        let header_height = config.month_row_height + config.day_row_height;
        let mut scene = Scene::new(self.state.year, self.state.day_width);
        scene.width = self.grid.content_width();
        scene.height = header_height + self.tasks.len() as f32 * config.row_height;

        for header in &self.grid.months {
            let first = NaiveDate::from_ymd_opt(header.year, header.month, 1)
                .expect("month header carries a valid month");
            scene.months.push(MonthLabel {
                text: first.format("%b %Y").to_string(),
                x: header.left + MONTH_LABEL_PAD,
            });
            scene.gridlines.push(GridLine { x: header.left });
        }

        for cell in &self.grid.days {
            scene.days.push(DayLabel {
                date: cell.date,
                x: cell.left + self.state.day_width / 2.0,
                visible: cell.visible,
                is_today: cell.is_today,
            });
        }

        for (index, (task, placement)) in self.tasks.iter().zip(&self.placements).enumerate() {
            let Some(geometry) = placement.geometry() else {
                continue;
            };
            let end_exclusive = task
                .end
                .succ_opt()
                .expect("placed bar has an in-year exclusive end");
            scene.bars.push(BarNode {
                name: task.name.clone(),
                x: geometry.left,
                y: header_height + index as f32 * config.row_height + BAR_VPAD,
                width: geometry.width,
                height: config.row_height - 2.0 * BAR_VPAD,
                start: task.start,
                end_exclusive,
            });
        }

        scene
    }

    fn present(&mut self) {
        self.surface.clear(self.scene.width, self.scene.height);
        for node in self.scene.iter_nodes() {
            self.surface.place(&node);
        }
        // Resizing may have clamped the scroll offset.
        self.state.viewport_scroll = self.surface.scroll_x();
    }

    /// Feeds one pointer or wheel event through the interaction state
    /// machine. Dragging pans the viewport opposite the pointer, wheel
    /// movement zooms.
    pub fn handle_pointer(&mut self, event: PointerEvent) {
        match event {
            PointerEvent::Down { x, .. } => {
                self.state.drag = DragState::Dragging { anchor_x: x };
            }
            PointerEvent::Moved { x, .. } => {
                let DragState::Dragging { anchor_x } = self.state.drag else {
                    return;
                };
                let dx = x - anchor_x;
                self.surface.scroll_by(-dx);
                self.state.drag = DragState::Dragging { anchor_x: x };
                self.state.viewport_scroll = self.surface.scroll_x();
            }
            PointerEvent::Up => {
                self.state.drag = DragState::Idle;
            }
            PointerEvent::Wheel { delta_y } => {
                let factor = if delta_y > 0.0 {
                    self.config.zoom_out_factor
                } else {
                    self.config.zoom_in_factor
                };
                self.set_day_width(self.state.day_width * factor);
            }
        }
    }

    /// Changes the zoom level and rebuilds. Out-of-range widths clamp so
    /// repeated zooming can never collapse the grid or blow it up.
    pub fn set_day_width(&mut self, value: f32) {
        let clamped = clamp_day_width(value, &self.config);
        if clamped != value {
            log::debug!("day width {value:.2} clamped to {clamped:.2}");
        }
        self.state.day_width = clamped;
        self.rebuild();
    }

    fn center_on_today(&mut self) {
        if self.today.year() == self.state.year {
            self.center_on(self.today);
        }
    }

    fn center_on(&mut self, date: NaiveDate) -> bool {
        if self.grid.cell_at(date).is_none() {
            return false;
        }
        let target =
            date.ordinal() as f32 * self.state.day_width - self.surface.viewport_width() / 2.0;
        self.surface.scroll_to(target);
        self.state.viewport_scroll = self.surface.scroll_x();
        true
    }

    /// Scrolls the viewport so `date` sits mid-screen. Returns false when
    /// the date lies outside the charted year.
    pub fn scroll_to_date(&mut self, date: NaiveDate) -> bool {
        self.center_on(date)
    }

    /// Unmounts the chart, blanking the surface and handing it back.
    pub fn dispose(mut self) -> S {
        self.surface.clear(0.0, 0.0);
        self.surface
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn grid(&self) -> &YearGrid {
        &self.grid
    }

    pub fn placements(&self) -> &[BarPlacement] {
        &self.placements
    }

    pub fn state(&self) -> &LayoutState {
        &self.state
    }

    pub fn day_width(&self) -> f32 {
        self.state.day_width
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }
}

fn clamp_day_width(value: f32, config: &TimelineConfig) -> f32 {
    value.min(config.max_day_width).max(config.min_day_width)
}
