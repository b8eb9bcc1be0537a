//! Frame Layout Algorithm
//!
//! Frames arrange their children in rows:
//! - Items flow left to right inside a row, separated by the padding
//! - Rows stack top to bottom, separated by the padding
//! - Every frame has the padding on its top and left edges, and its width
//!   adds the padding on both sides of its widest row
//! - Nested frames are laid out recursively at the position their parent
//!   assigned them
//!
//! All coordinates are absolute in the space of the top-level item list.

use crate::{
    row_metrics, validate_items, Frame, Item, LayoutConfig, LayoutObserver, NoopObserver, Rect,
    Result, SizingMode, TracingObserver,
};

/// Lays out frame trees with a fixed configuration
#[derive(Debug, Clone, Default)]
pub struct FrameLayoutEngine {
    config: LayoutConfig,
}

impl FrameLayoutEngine {
    /// Create an engine with the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an engine with the given configuration
    pub fn with_config(config: LayoutConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Position every item in `frame` relative to `(offset_x, offset_y)` and
    /// update the frame's own width and height.
    ///
    /// The frame's own `x`/`y` are left alone; its parent (or the caller)
    /// owns those. In [`SizingMode::Literal`] each row is measured before its
    /// child frames are laid out, so the row height and the sibling cursor
    /// see a child frame's size from the previous pass. The frame's width is
    /// measured once all rows are done.
    pub fn layout_frame<O: LayoutObserver>(
        &self,
        frame: &mut Frame,
        offset_x: f32,
        offset_y: f32,
        observer: &mut O,
    ) {
        let padding = self.config.padding;
        observer.frame_started(&frame.id, offset_x, offset_y);

        let mut current_y = offset_y + padding;

        for (row_index, row) in frame.rows.iter_mut().enumerate() {
            if self.config.sizing == SizingMode::Settled {
                self.measure_child_frames(row, observer);
            }

            let metrics = row_metrics(row, padding);
            observer.row_measured(&frame.id, row_index, metrics);

            let mut current_x = offset_x + padding;
            for item in row.iter_mut() {
                // Cursor advances by the width held before recursion
                let width = item.width();
                self.place_item(item, current_x, current_y, observer);
                current_x += width + padding;
            }

            current_y += metrics.height + padding;
        }

        let content_width = frame
            .rows
            .iter()
            .map(|row| row_metrics(row, padding).width)
            .fold(0.0, f32::max);

        frame.width = content_width + 2.0 * padding;
        frame.height = current_y - offset_y;

        observer.frame_finished(
            &frame.id,
            Rect::new(offset_x, offset_y, frame.width, frame.height),
        );
    }

    /// Lay out every top-level frame at its own `(x, y)`.
    ///
    /// Top-level components have nothing to lay out and are not touched.
    pub fn layout_items<O: LayoutObserver>(&self, items: &mut [Item], observer: &mut O) {
        tracing::debug!(target: "frame_layout", count = items.len(), "starting layout of items");

        for item in items.iter_mut() {
            if let Item::Frame(frame) = item {
                let (x, y) = (frame.x, frame.y);
                self.layout_frame(frame, x, y, observer);
            }
        }

        tracing::debug!(target: "frame_layout", "completed layout of items");
    }

    /// Validate the configuration and the tree, then lay the tree out
    pub fn try_layout_items<O: LayoutObserver>(
        &self,
        items: &mut [Item],
        observer: &mut O,
    ) -> Result<()> {
        self.config.validate()?;
        validate_items(items)?;
        self.layout_items(items, observer);
        Ok(())
    }

    fn place_item<O: LayoutObserver>(&self, item: &mut Item, x: f32, y: f32, observer: &mut O) {
        match self.config.sizing {
            SizingMode::Literal => {
                item.set_position(x, y);
                observer.item_positioned(item.id(), x, y);
                if let Item::Frame(child) = item {
                    self.layout_frame(child, x, y, observer);
                }
            }
            SizingMode::Settled => {
                // Child frames were measured at the origin; move them into place
                let (dx, dy) = (x - item.x(), y - item.y());
                item.translate(dx, dy);
                observer.item_positioned(item.id(), x, y);
            }
        }
    }

    /// Lay out each child frame of a row at the origin so that its size is
    /// final before the row is measured. Observer events for the measured
    /// subtree carry origin-relative coordinates.
    fn measure_child_frames<O: LayoutObserver>(&self, row: &mut [Item], observer: &mut O) {
        for item in row.iter_mut() {
            if let Item::Frame(child) = item {
                child.x = 0.0;
                child.y = 0.0;
                self.layout_frame(child, 0.0, 0.0, observer);
            }
        }
    }
}

/// Lay out a single frame with the default configuration, tracing progress
pub fn layout_frame(frame: &mut Frame, offset_x: f32, offset_y: f32) {
    FrameLayoutEngine::new().layout_frame(frame, offset_x, offset_y, &mut TracingObserver);
}

/// Lay out a list of top-level items with the default configuration, tracing
/// progress
pub fn layout_items(items: &mut [Item]) {
    FrameLayoutEngine::new().layout_items(items, &mut TracingObserver);
}

/// Lay out a list of top-level items without any diagnostics
pub fn layout_items_quiet(items: &mut [Item], config: LayoutConfig) {
    FrameLayoutEngine::with_config(config).layout_items(items, &mut NoopObserver);
}
