//! Pre-order linearisation of an item tree

use crate::Item;

/// Collect every item in the tree in pre-order.
///
/// A frame comes before its descendants, which follow in row-major order; a
/// nested frame's subtree is emitted before its next sibling.
pub fn flatten(items: &[Item]) -> Vec<&Item> {
    let mut result = Vec::new();
    for item in items {
        push_subtree(item, &mut result);
    }
    result
}

/// Ids of every item, in the same order as [`flatten`]
pub fn flatten_ids(items: &[Item]) -> Vec<&str> {
    flatten(items).into_iter().map(Item::id).collect()
}

fn push_subtree<'a>(item: &'a Item, result: &mut Vec<&'a Item>) {
    result.push(item);
    if let Item::Frame(frame) = item {
        for child in frame.children() {
            push_subtree(child, result);
        }
    }
}
