mod bars;
mod density;
mod grid;
pub(crate) mod types;
pub use bars::{map_bar, map_bars};
pub use density::apply_density;
pub use grid::build_grid;
pub use types::*;

use crate::config::TimelineConfig;
use crate::task::Task;
use chrono::{Datelike, NaiveDate};
