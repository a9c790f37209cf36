use super::*;

/// One calendar day placed on the horizontal axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DayCell {
    pub date: NaiveDate,
    /// Pixel offset of the cell's left edge inside the scrollable content.
    pub left: f32,
    /// False when the density filter hides this cell's label.
    pub visible: bool,
    pub is_today: bool,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonthHeader {
    pub year: i32,
    /// 1-12.
    pub month: u32,
    pub left: f32,
}

/// The full day grid for one calendar year at one zoom level.
#[derive(Debug, Clone)]
pub struct YearGrid {
    pub year: i32,
    pub day_width: f32,
    pub months: Vec<MonthHeader>,
    pub days: Vec<DayCell>,
}

impl YearGrid {
    /// Looks up the cell for `date`, or `None` when the date falls outside
    /// the grid's year.
    pub fn cell_at(&self, date: NaiveDate) -> Option<&DayCell> {
        if date.year() != self.year {
            return None;
        }
        self.days.get(date.ordinal0() as usize)
    }

    pub fn content_width(&self) -> f32 {
        self.days.len() as f32 * self.day_width
    }
}

/// Horizontal extent of one task bar, in content pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BarGeometry {
    pub left: f32,
    pub width: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClipReason {
    StartOutsideYear,
    EndOutsideYear,
}

impl std::fmt::Display for ClipReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ClipReason::StartOutsideYear => write!(f, "start date is outside the charted year"),
            ClipReason::EndOutsideYear => write!(f, "end date runs past the charted year"),
        }
    }
}

/// Outcome of mapping one task onto the grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BarPlacement {
    Placed(BarGeometry),
    Clipped(ClipReason),
}

impl BarPlacement {
    pub fn geometry(&self) -> Option<BarGeometry> {
        match self {
            BarPlacement::Placed(geometry) => Some(*geometry),
            BarPlacement::Clipped(_) => None,
        }
    }

    pub fn is_clipped(&self) -> bool {
        matches!(self, BarPlacement::Clipped(_))
    }
}

/// Month caption positioned in the header band.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthLabel {
    pub text: String,
    pub x: f32,
}

/// Day-of-month caption positioned in the header band.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DayLabel {
    pub date: NaiveDate,
    pub x: f32,
    pub visible: bool,
    pub is_today: bool,
}

/// Vertical rule marking a month boundary.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridLine {
    pub x: f32,
}

/// One task bar with its resolved on-screen rectangle.
#[derive(Debug, Clone, PartialEq)]
pub struct BarNode {
    pub name: String,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub start: NaiveDate,
    pub end_exclusive: NaiveDate,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SceneNode {
    Month(MonthLabel),
    Day(DayLabel),
    GridLine(GridLine),
    Bar(BarNode),
}

/// Everything the chart draws for one rebuild, in content coordinates.
#[derive(Debug, Clone)]
pub struct Scene {
    pub year: i32,
    pub day_width: f32,
    pub width: f32,
    pub height: f32,
    pub months: Vec<MonthLabel>,
    pub days: Vec<DayLabel>,
    pub gridlines: Vec<GridLine>,
    pub bars: Vec<BarNode>,
}

impl Scene {
    pub fn new(year: i32, day_width: f32) -> Self {
        Self {
            year,
            day_width,
            width: 0.0,
            height: 0.0,
            months: Vec::new(),
            days: Vec::new(),
            gridlines: Vec::new(),
            bars: Vec::new(),
        }
    }

    /// All drawable nodes in paint order: gridlines, headers, then bars.
    pub fn iter_nodes(&self) -> impl Iterator<Item = SceneNode> + '_ {
        self.gridlines
            .iter()
            .map(|line| SceneNode::GridLine(*line))
            .chain(self.months.iter().map(|m| SceneNode::Month(m.clone())))
            .chain(self.days.iter().map(|d| SceneNode::Day(*d)))
            .chain(self.bars.iter().map(|b| SceneNode::Bar(b.clone())))
    }
}
