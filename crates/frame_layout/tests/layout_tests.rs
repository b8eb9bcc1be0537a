//! Integration tests for frame layout
//! Covers nested positioning, convergence across passes, flatten ordering and
//! loading trees from JSON.

use frame_layout::{
    flatten, flatten_ids, items_from_json_str, layout_items, Component, EventCollector, Frame,
    FrameLayoutEngine, Item, LayoutConfig, LayoutEvent, NoopObserver, SizingMode,
};
use proptest::prelude::*;

const NESTED_EXAMPLE: &str = r#"[
  {
    "id": "frame1", "type": "FRAME", "width": 0, "height": 0, "x": 0, "y": 0,
    "rows": [
      [
        { "id": "item1", "width": 100, "height": 50, "x": 0, "y": 0 },
        { "id": "item2", "width": 150, "height": 50, "x": 0, "y": 0 }
      ],
      [
        { "id": "item3", "width": 200, "height": 100, "x": 0, "y": 0 },
        {
          "id": "nestedFrame", "type": "FRAME", "width": 0, "height": 0, "x": 0, "y": 0,
          "rows": [
            [
              { "id": "nestedItem1", "width": 80, "height": 40, "x": 0, "y": 0 },
              { "id": "nestedItem2", "width": 120, "height": 60, "x": 0, "y": 0 }
            ],
            [
              { "id": "nestedItem3", "width": 100, "height": 50, "x": 0, "y": 0 }
            ]
          ]
        }
      ]
    ]
  }
]"#;

fn nested_example() -> Vec<Item> {
    items_from_json_str(NESTED_EXAMPLE).unwrap()
}

/// Find an item by id anywhere in the tree
fn find<'a>(items: &'a [Item], id: &str) -> &'a Item {
    flatten(items)
        .into_iter()
        .find(|item| item.id() == id)
        .unwrap_or_else(|| panic!("no item with id {}", id))
}

fn position(items: &[Item], id: &str) -> (f32, f32) {
    let item = find(items, id);
    (item.x(), item.y())
}

fn size(items: &[Item], id: &str) -> (f32, f32) {
    let item = find(items, id);
    (item.width(), item.height())
}

#[test]
fn test_nested_example_first_pass() {
    let mut items = nested_example();
    layout_items(&mut items);

    assert_eq!(position(&items, "frame1"), (0.0, 0.0));
    assert_eq!(position(&items, "item1"), (50.0, 50.0));
    assert_eq!(position(&items, "item2"), (200.0, 50.0));
    assert_eq!(position(&items, "item3"), (50.0, 150.0));
    assert_eq!(position(&items, "nestedFrame"), (300.0, 150.0));

    // Nested items are offset from the nested frame, not the root
    assert_eq!(position(&items, "nestedItem1"), (350.0, 200.0));
    assert_eq!(position(&items, "nestedItem2"), (480.0, 200.0));
    assert_eq!(position(&items, "nestedItem3"), (350.0, 310.0));

    assert_eq!(size(&items, "nestedFrame"), (350.0, 260.0));
    // Row height used the nested frame's pre-layout height of zero
    assert_eq!(size(&items, "frame1"), (700.0, 300.0));
}

#[test]
fn test_nested_example_second_pass_settles() {
    let mut items = nested_example();
    let engine = FrameLayoutEngine::new();
    engine.layout_items(&mut items, &mut NoopObserver);
    engine.layout_items(&mut items, &mut NoopObserver);

    assert_eq!(size(&items, "frame1"), (700.0, 460.0));
    assert_eq!(position(&items, "nestedFrame"), (300.0, 150.0));

    let settled = items.clone();
    engine.layout_items(&mut items, &mut NoopObserver);
    assert_eq!(items, settled);
}

#[test]
fn test_settled_mode_converges_in_one_pass() {
    let mut items = nested_example();
    let engine =
        FrameLayoutEngine::with_config(LayoutConfig::new().with_sizing(SizingMode::Settled));
    engine.layout_items(&mut items, &mut NoopObserver);

    assert_eq!(size(&items, "frame1"), (700.0, 460.0));
    assert_eq!(size(&items, "nestedFrame"), (350.0, 260.0));
    assert_eq!(position(&items, "nestedItem3"), (350.0, 310.0));

    let settled = items.clone();
    engine.layout_items(&mut items, &mut NoopObserver);
    assert_eq!(items, settled);
}

#[test]
fn test_flatten_nested_example() {
    let items = nested_example();
    assert_eq!(
        flatten_ids(&items),
        vec![
            "frame1",
            "item1",
            "item2",
            "item3",
            "nestedFrame",
            "nestedItem1",
            "nestedItem2",
            "nestedItem3",
        ]
    );
}

#[test]
fn test_flatten_sibling_trees_in_input_order() {
    let mut items = nested_example();
    items.insert(0, Component::new("first", 1.0, 1.0).into());
    items.push(
        Frame::new("last")
            .with_row(vec![Component::new("lastChild", 1.0, 1.0).into()])
            .into(),
    );

    let ids = flatten_ids(&items);
    assert_eq!(ids.first(), Some(&"first"));
    assert_eq!(&ids[ids.len() - 2..], &["last", "lastChild"]);
    assert_eq!(ids.len(), 11);
}

#[test]
fn test_flatten_does_not_depend_on_layout() {
    let binding = nested_example();
    let before = flatten_ids(&binding);
    let mut items = nested_example();
    layout_items(&mut items);
    assert_eq!(flatten_ids(&items), before);
}

#[test]
fn test_top_level_frame_offset_from_its_position() {
    let mut items: Vec<Item> = vec![Frame::new("moved")
        .at(1000.0, 500.0)
        .with_row(vec![Component::new("a", 10.0, 10.0).into()])
        .into()];
    layout_items(&mut items);
    assert_eq!(position(&items, "a"), (1050.0, 550.0));
    assert_eq!(position(&items, "moved"), (1000.0, 500.0));
}

#[test]
fn test_top_level_components_untouched() {
    let mut items: Vec<Item> = vec![
        Component::new("c1", 10.0, 20.0).at(3.0, 4.0).into(),
        Component::new("c2", 0.0, 0.0).into(),
    ];
    let before = items.clone();
    layout_items(&mut items);
    assert_eq!(items, before);
}

#[test]
fn test_trace_events_follow_depth_first_order() {
    let mut items = nested_example();
    let mut collector = EventCollector::new();
    FrameLayoutEngine::new().layout_items(&mut items, &mut collector);

    let started: Vec<&str> = collector
        .events()
        .iter()
        .filter_map(|event| match event {
            LayoutEvent::FrameStarted { frame_id, .. } => Some(frame_id.as_str()),
            _ => None,
        })
        .collect();
    let finished: Vec<&str> = collector
        .events()
        .iter()
        .filter_map(|event| match event {
            LayoutEvent::FrameFinished { frame_id, .. } => Some(frame_id.as_str()),
            _ => None,
        })
        .collect();

    assert_eq!(started, vec!["frame1", "nestedFrame"]);
    assert_eq!(finished, vec!["nestedFrame", "frame1"]);
}

fn item_strategy() -> impl Strategy<Value = Item> {
    let leaf = (0u16..300, 0u16..300)
        .prop_map(|(width, height)| Item::from(Component::new("c", width as f32, height as f32)));
    leaf.prop_recursive(4, 48, 4, |inner| {
        prop::collection::vec(prop::collection::vec(inner, 0..4), 0..4)
            .prop_map(|rows| Item::from(Frame::new("f").with_rows(rows)))
    })
}

fn tree_strategy() -> impl Strategy<Value = Vec<Item>> {
    prop::collection::vec(item_strategy(), 0..4)
}

/// Every direct child sits inside its frame's padded content box
fn children_inside(item: &Item, padding: f32) -> bool {
    match item {
        Item::Component(_) => true,
        Item::Frame(frame) => {
            let outer = item.bounds();
            frame.children().all(|child| {
                let inner = child.bounds();
                inner.x >= outer.x + padding
                    && inner.y >= outer.y + padding
                    && inner.right() <= outer.right() - padding
                    && inner.bottom() <= outer.bottom() - padding
                    && children_inside(child, padding)
            })
        }
    }
}

proptest! {
    #[test]
    fn prop_layout_is_deterministic(items in tree_strategy()) {
        let mut first = items.clone();
        let mut second = items;
        layout_items(&mut first);
        layout_items(&mut second);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_literal_layout_converges(items in tree_strategy()) {
        let engine = FrameLayoutEngine::new();
        let mut items = items;
        // One pass per nesting level plus one
        for _ in 0..6 {
            engine.layout_items(&mut items, &mut NoopObserver);
        }
        let converged = items.clone();
        engine.layout_items(&mut items, &mut NoopObserver);
        prop_assert_eq!(items, converged);
    }

    #[test]
    fn prop_settled_layout_is_stable(items in tree_strategy()) {
        let engine = FrameLayoutEngine::with_config(
            LayoutConfig::new().with_sizing(SizingMode::Settled),
        );
        let mut items = items;
        engine.layout_items(&mut items, &mut NoopObserver);
        let first = items.clone();
        engine.layout_items(&mut items, &mut NoopObserver);
        prop_assert_eq!(items, first);
    }

    #[test]
    fn prop_settled_frames_contain_children(items in tree_strategy()) {
        let config = LayoutConfig::new().with_sizing(SizingMode::Settled);
        let mut items = items;
        FrameLayoutEngine::with_config(config).layout_items(&mut items, &mut NoopObserver);
        for item in &items {
            prop_assert!(children_inside(item, config.padding));
        }
    }

    #[test]
    fn prop_component_sizes_never_change(items in tree_strategy()) {
        let before: Vec<(f32, f32)> = flatten(&items)
            .into_iter()
            .filter(|item| !item.is_frame())
            .map(|item| (item.width(), item.height()))
            .collect();
        let mut items = items;
        layout_items(&mut items);
        let after: Vec<(f32, f32)> = flatten(&items)
            .into_iter()
            .filter(|item| !item.is_frame())
            .map(|item| (item.width(), item.height()))
            .collect();
        prop_assert_eq!(before, after);
    }
}
