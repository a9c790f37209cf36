#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod engine;
pub mod layout;
pub mod render;
pub mod scene_dump;
pub mod surface;
pub mod task;
pub mod theme;

#[cfg(feature = "cli")]
pub use cli::run;
pub use config::{Config, RenderConfig, TimelineConfig, load_config};
pub use engine::{DragState, LayoutState, MountError, TimelineChart};
pub use layout::{
    BarGeometry, BarNode, BarPlacement, ClipReason, DayCell, DayLabel, GridLine, MonthHeader,
    MonthLabel, Scene, SceneNode, YearGrid, apply_density, build_grid, map_bar, map_bars,
};
pub use render::render_svg;
pub use surface::{MemoryHost, MemorySurface, PointerEvent, Surface, SurfaceProvider};
pub use task::{Task, TaskError, load_tasks, parse_tasks};
pub use theme::Theme;
