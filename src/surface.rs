use crate::layout::SceneNode;
use std::collections::HashMap;

/// A scrollable drawing target the chart presents into.
///
/// The chart owns its surface for as long as it is mounted and talks to it
/// through this trait only, so tests and the CLI can run against an
/// in-memory implementation while embedders bring their own.
pub trait Surface {
    /// Drops the previous frame and resizes the scrollable content.
    fn clear(&mut self, content_width: f32, content_height: f32);

    /// Adds one node to the current frame.
    fn place(&mut self, node: &SceneNode);

    /// Width of the visible viewport, in pixels.
    fn viewport_width(&self) -> f32;

    /// Current horizontal scroll offset.
    fn scroll_x(&self) -> f32;

    /// Scrolls so `x` becomes the left edge of the viewport.
    fn scroll_to(&mut self, x: f32);

    fn scroll_by(&mut self, dx: f32) {
        self.scroll_to(self.scroll_x() + dx);
    }
}

/// Hands out surfaces by selector when a chart mounts.
pub trait SurfaceProvider {
    type Surface: Surface;

    /// Returns the surface registered under `selector`, transferring
    /// ownership to the caller, or `None` when no such surface exists.
    fn acquire(&mut self, selector: &str) -> Option<Self::Surface>;
}

/// A pointer or wheel interaction forwarded to the chart.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    Down { x: f32, y: f32 },
    Moved { x: f32, y: f32 },
    Up,
    Wheel { delta_y: f32 },
}

/// In-memory surface that records what it was asked to draw.
///
/// Scroll offsets clamp into `[0, content_width - viewport_width]` like a
/// real scroll container, and `frames` counts how many times the content
/// was cleared.
#[derive(Debug, Clone, Default)]
pub struct MemorySurface {
    viewport_width: f32,
    content_width: f32,
    content_height: f32,
    scroll_x: f32,
    nodes: Vec<SceneNode>,
    frames: usize,
}

impl MemorySurface {
    pub fn new(viewport_width: f32) -> Self {
        Self {
            viewport_width,
            ..Self::default()
        }
    }

    pub fn nodes(&self) -> &[SceneNode] {
        &self.nodes
    }

    /// Number of `clear` calls, one per presented frame.
    pub fn frames(&self) -> usize {
        self.frames
    }

    pub fn content_width(&self) -> f32 {
        self.content_width
    }

    pub fn content_height(&self) -> f32 {
        self.content_height
    }

    fn max_scroll(&self) -> f32 {
        (self.content_width - self.viewport_width).max(0.0)
    }
}

impl Surface for MemorySurface {
    fn clear(&mut self, content_width: f32, content_height: f32) {
        self.content_width = content_width;
        self.content_height = content_height;
        self.nodes.clear();
        self.frames += 1;
        // The old offset may fall outside the resized content.
        self.scroll_x = self.scroll_x.min(self.max_scroll()).max(0.0);
    }

    fn place(&mut self, node: &SceneNode) {
        self.nodes.push(node.clone());
    }

    fn viewport_width(&self) -> f32 {
        self.viewport_width
    }

    fn scroll_x(&self) -> f32 {
        self.scroll_x
    }

    fn scroll_to(&mut self, x: f32) {
        self.scroll_x = x.min(self.max_scroll()).max(0.0);
    }
}

/// Registry of named in-memory surfaces, used by the CLI and tests.
#[derive(Debug, Default)]
pub struct MemoryHost {
    surfaces: HashMap<String, MemorySurface>,
}

impl MemoryHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, selector: impl Into<String>, surface: MemorySurface) {
        self.surfaces.insert(selector.into(), surface);
    }
}

impl SurfaceProvider for MemoryHost {
    type Surface = MemorySurface;

    fn acquire(&mut self, selector: &str) -> Option<MemorySurface> {
        self.surfaces.remove(selector)
    }
}
