//! Frame Layout - Row-flow layout for trees of frames and components
//!
//! Components are fixed-size leaves. Frames arrange their children in rows
//! with uniform padding and size themselves to fit. Layout assigns absolute
//! positions to every item and recomputes every frame's size in place.

mod config;
mod error;
mod flatten;
mod layout;
mod item;
mod observer;
mod row_metrics;
mod validate;

pub use config::*;
pub use error::*;
pub use flatten::*;
pub use layout::*;
pub use item::*;
pub use observer::*;
pub use row_metrics::*;
pub use validate::*;
