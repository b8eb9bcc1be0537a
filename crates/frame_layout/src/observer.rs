//! Layout observers
//!
//! Layout reports its progress through a [`LayoutObserver`] supplied by the
//! caller. Observers are advisory: the computed layout is the same whichever
//! observer is used.

use crate::{Rect, RowMetrics};

/// Receives progress notifications during a layout pass
pub trait LayoutObserver {
    /// A frame is about to be laid out at the given offset
    fn frame_started(&mut self, _frame_id: &str, _offset_x: f32, _offset_y: f32) {}

    /// A row's metrics were measured, before its items are placed
    fn row_measured(&mut self, _frame_id: &str, _row_index: usize, _metrics: RowMetrics) {}

    /// An item received its position
    fn item_positioned(&mut self, _item_id: &str, _x: f32, _y: f32) {}

    /// A frame finished and its size was updated
    fn frame_finished(&mut self, _frame_id: &str, _bounds: Rect) {}
}

/// Observer that ignores every notification
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl LayoutObserver for NoopObserver {}

/// Observer that forwards notifications as `tracing` events
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl LayoutObserver for TracingObserver {
    fn frame_started(&mut self, frame_id: &str, offset_x: f32, offset_y: f32) {
        tracing::trace!(
            target: "frame_layout::frame",
            frame = frame_id,
            offset_x,
            offset_y,
            "laying out frame"
        );
    }

    fn row_measured(&mut self, frame_id: &str, row_index: usize, metrics: RowMetrics) {
        tracing::trace!(
            target: "frame_layout::row",
            frame = frame_id,
            row = row_index,
            width = metrics.width,
            height = metrics.height,
            "row measured"
        );
    }

    fn item_positioned(&mut self, item_id: &str, x: f32, y: f32) {
        tracing::trace!(
            target: "frame_layout::item",
            item = item_id,
            x,
            y,
            "item positioned"
        );
    }

    fn frame_finished(&mut self, frame_id: &str, bounds: Rect) {
        tracing::trace!(
            target: "frame_layout::frame",
            frame = frame_id,
            width = bounds.width,
            height = bounds.height,
            "frame dimensions"
        );
    }
}

/// A recorded layout notification
#[derive(Debug, Clone, PartialEq)]
pub enum LayoutEvent {
    FrameStarted {
        frame_id: String,
        offset_x: f32,
        offset_y: f32,
    },
    RowMeasured {
        frame_id: String,
        row_index: usize,
        metrics: RowMetrics,
    },
    ItemPositioned {
        item_id: String,
        x: f32,
        y: f32,
    },
    FrameFinished {
        frame_id: String,
        bounds: Rect,
    },
}

/// Observer that records every notification in order
#[derive(Debug, Clone, Default)]
pub struct EventCollector {
    events: Vec<LayoutEvent>,
}

impl EventCollector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> &[LayoutEvent] {
        &self.events
    }

    pub fn into_events(self) -> Vec<LayoutEvent> {
        self.events
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }
}

impl LayoutObserver for EventCollector {
    fn frame_started(&mut self, frame_id: &str, offset_x: f32, offset_y: f32) {
        self.events.push(LayoutEvent::FrameStarted {
            frame_id: frame_id.to_string(),
            offset_x,
            offset_y,
        });
    }

    fn row_measured(&mut self, frame_id: &str, row_index: usize, metrics: RowMetrics) {
        self.events.push(LayoutEvent::RowMeasured {
            frame_id: frame_id.to_string(),
            row_index,
            metrics,
        });
    }

    fn item_positioned(&mut self, item_id: &str, x: f32, y: f32) {
        self.events.push(LayoutEvent::ItemPositioned {
            item_id: item_id.to_string(),
            x,
            y,
        });
    }

    fn frame_finished(&mut self, frame_id: &str, bounds: Rect) {
        self.events.push(LayoutEvent::FrameFinished {
            frame_id: frame_id.to_string(),
            bounds,
        });
    }
}

impl<T: LayoutObserver + ?Sized> LayoutObserver for &mut T {
    fn frame_started(&mut self, frame_id: &str, offset_x: f32, offset_y: f32) {
        (**self).frame_started(frame_id, offset_x, offset_y);
    }

    fn row_measured(&mut self, frame_id: &str, row_index: usize, metrics: RowMetrics) {
        (**self).row_measured(frame_id, row_index, metrics);
    }

    fn item_positioned(&mut self, item_id: &str, x: f32, y: f32) {
        (**self).item_positioned(item_id, x, y);
    }

    fn frame_finished(&mut self, frame_id: &str, bounds: Rect) {
        (**self).frame_finished(frame_id, bounds);
    }
}
