//! Lay out a small nested tree and print every box.
//!
//! Run with `RUST_LOG=frame_layout=trace` to see the layout trace.

use frame_layout::{flatten, layout_items, Component, Frame, Item};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn build_items() -> Vec<Item> {
    let nested = Frame::new("nestedFrame")
        .with_row(vec![
            Component::new("nestedItem1", 80.0, 40.0).into(),
            Component::new("nestedItem2", 120.0, 60.0).into(),
        ])
        .with_row(vec![Component::new("nestedItem3", 100.0, 50.0).into()]);

    let root = Frame::new("frame1")
        .with_row(vec![
            Component::new("item1", 100.0, 50.0).into(),
            Component::new("item2", 150.0, 50.0).into(),
        ])
        .with_row(vec![
            Component::new("item3", 200.0, 100.0).into(),
            nested.into(),
        ]);

    vec![root.into()]
}

fn main() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let mut items = build_items();
    layout_items(&mut items);

    for item in flatten(&items) {
        let bounds = item.bounds();
        println!(
            "{:<12} {:<9} x={:>6} y={:>6} w={:>6} h={:>6}",
            item.id(),
            item.tag(),
            bounds.x,
            bounds.y,
            bounds.width,
            bounds.height
        );
    }
}
