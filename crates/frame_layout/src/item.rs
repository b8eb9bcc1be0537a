//! Item tree structure
//!
//! The tree is made of two node kinds: fixed-size [`Component`] leaves and
//! [`Frame`] containers that own their children as rows. Positions are
//! absolute once layout has run.

use crate::{LayoutError, Result};
use serde::{Deserialize, Serialize};

/// Tag used for frames in serialized trees
pub const FRAME_TAG: &str = "FRAME";

/// Tag used for components in serialized trees
pub const COMPONENT_TAG: &str = "COMPONENT";

/// A rectangle in layout coordinates
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }
}

/// A row of sibling items, laid out left to right
pub type Row = Vec<Item>;

/// A leaf item with a caller-supplied size
#[derive(Debug, Clone, PartialEq)]
pub struct Component {
    pub id: String,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Component {
    /// Create a component at the origin
    pub fn new(id: impl Into<String>, width: f32, height: f32) -> Self {
        Self {
            id: id.into(),
            x: 0.0,
            y: 0.0,
            width,
            height,
        }
    }

    /// Place the component at a position
    pub fn at(mut self, x: f32, y: f32) -> Self {
        self.x = x;
        self.y = y;
        self
    }
}

/// A container whose size is derived from its rows
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub id: String,
    pub x: f32,
    pub y: f32,
    /// Output of layout; overwritten on every pass
    pub width: f32,
    /// Output of layout; overwritten on every pass
    pub height: f32,
    pub rows: Vec<Row>,
}

impl Frame {
    /// Create an empty frame at the origin
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            x: 0.0,
            y: 0.0,
            width: 0.0,
            height: 0.0,
            rows: Vec::new(),
        }
    }

    /// Place the frame at a position
    pub fn at(mut self, x: f32, y: f32) -> Self {
        self.x = x;
        self.y = y;
        self
    }

    /// Append a row of items
    pub fn with_row(mut self, row: Row) -> Self {
        self.rows.push(row);
        self
    }

    /// Replace all rows
    pub fn with_rows(mut self, rows: Vec<Row>) -> Self {
        self.rows = rows;
        self
    }

    /// Append a row of items in place
    pub fn add_row(&mut self, row: Row) {
        self.rows.push(row);
    }

    /// Number of rows
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Iterate direct children in row-major order
    pub fn children(&self) -> impl Iterator<Item = &Item> {
        self.rows.iter().flatten()
    }
}

/// A node in the layout tree
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawItem", into = "RawItem")]
pub enum Item {
    Component(Component),
    Frame(Frame),
}

impl Item {
    pub fn id(&self) -> &str {
        match self {
            Item::Component(c) => &c.id,
            Item::Frame(f) => &f.id,
        }
    }

    pub fn x(&self) -> f32 {
        match self {
            Item::Component(c) => c.x,
            Item::Frame(f) => f.x,
        }
    }

    pub fn y(&self) -> f32 {
        match self {
            Item::Component(c) => c.y,
            Item::Frame(f) => f.y,
        }
    }

    pub fn width(&self) -> f32 {
        match self {
            Item::Component(c) => c.width,
            Item::Frame(f) => f.width,
        }
    }

    pub fn height(&self) -> f32 {
        match self {
            Item::Component(c) => c.height,
            Item::Frame(f) => f.height,
        }
    }

    /// The item's box in absolute coordinates
    pub fn bounds(&self) -> Rect {
        Rect::new(self.x(), self.y(), self.width(), self.height())
    }

    pub fn set_position(&mut self, x: f32, y: f32) {
        match self {
            Item::Component(c) => {
                c.x = x;
                c.y = y;
            }
            Item::Frame(f) => {
                f.x = x;
                f.y = y;
            }
        }
    }

    /// Shift this item and every descendant by the given delta
    pub fn translate(&mut self, dx: f32, dy: f32) {
        let (x, y) = (self.x(), self.y());
        self.set_position(x + dx, y + dy);
        if let Item::Frame(frame) = self {
            for item in frame.rows.iter_mut().flatten() {
                item.translate(dx, dy);
            }
        }
    }

    pub fn is_frame(&self) -> bool {
        matches!(self, Item::Frame(_))
    }

    pub fn as_frame(&self) -> Option<&Frame> {
        match self {
            Item::Frame(f) => Some(f),
            Item::Component(_) => None,
        }
    }

    pub fn as_frame_mut(&mut self) -> Option<&mut Frame> {
        match self {
            Item::Frame(f) => Some(f),
            Item::Component(_) => None,
        }
    }

    /// The serialized tag for this variant
    pub fn tag(&self) -> &'static str {
        match self {
            Item::Component(_) => COMPONENT_TAG,
            Item::Frame(_) => FRAME_TAG,
        }
    }
}

impl From<Component> for Item {
    fn from(component: Component) -> Self {
        Item::Component(component)
    }
}

impl From<Frame> for Item {
    fn from(frame: Frame) -> Self {
        Item::Frame(frame)
    }
}

/// Wire shape of an item: a flat record with an optional `type` tag
#[derive(Debug, Clone, Serialize, Deserialize)]
struct RawItem {
    id: String,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    kind: Option<String>,
    #[serde(default)]
    width: f32,
    #[serde(default)]
    height: f32,
    #[serde(default)]
    x: f32,
    #[serde(default)]
    y: f32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    rows: Option<Vec<Vec<RawItem>>>,
}

impl TryFrom<RawItem> for Item {
    type Error = LayoutError;

    fn try_from(raw: RawItem) -> Result<Self> {
        match raw.kind.as_deref() {
            // Untagged records are leaves
            None | Some(COMPONENT_TAG) => Ok(Item::Component(Component {
                id: raw.id,
                x: raw.x,
                y: raw.y,
                width: raw.width,
                height: raw.height,
            })),
            Some(FRAME_TAG) => {
                let rows = raw
                    .rows
                    .unwrap_or_default()
                    .into_iter()
                    .map(|row| row.into_iter().map(Item::try_from).collect::<Result<Row>>())
                    .collect::<Result<Vec<Row>>>()?;
                Ok(Item::Frame(Frame {
                    id: raw.id,
                    x: raw.x,
                    y: raw.y,
                    width: raw.width,
                    height: raw.height,
                    rows,
                }))
            }
            Some(other) => Err(LayoutError::UnknownVariant(format!(
                "{} (item {})",
                other, raw.id
            ))),
        }
    }
}

impl From<Item> for RawItem {
    fn from(item: Item) -> Self {
        match item {
            Item::Component(c) => RawItem {
                id: c.id,
                kind: Some(COMPONENT_TAG.to_string()),
                width: c.width,
                height: c.height,
                x: c.x,
                y: c.y,
                rows: None,
            },
            Item::Frame(f) => RawItem {
                id: f.id,
                kind: Some(FRAME_TAG.to_string()),
                width: f.width,
                height: f.height,
                x: f.x,
                y: f.y,
                rows: Some(
                    f.rows
                        .into_iter()
                        .map(|row| row.into_iter().map(RawItem::from).collect())
                        .collect(),
                ),
            },
        }
    }
}

/// Parse a top-level list of items from JSON
pub fn items_from_json_str(json: &str) -> Result<Vec<Item>> {
    Ok(serde_json::from_str(json)?)
}

/// Serialize a list of items to pretty-printed JSON
pub fn items_to_json_string(items: &[Item]) -> Result<String> {
    Ok(serde_json::to_string_pretty(items)?)
}
