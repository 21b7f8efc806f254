use super::entity::Entity;

/// Axis-aligned box overlap. Edges that only touch do not count.
pub fn overlaps(a: &Entity, b: &Entity) -> bool {
    a.left() < b.right() && b.left() < a.right() && a.bottom() < b.top() && b.bottom() < a.top()
}

/// Indices of every member of `collection` overlapping `entity`, in order
pub fn find_collision_indices(entity: &Entity, collection: &[Entity]) -> Vec<usize> {
    collection
        .iter()
        .enumerate()
        .filter(|(_, other)| overlaps(entity, other))
        .map(|(idx, _)| idx)
        .collect()
}

/// Every member of `collection` overlapping `entity`, in order
pub fn find_collisions<'a>(entity: &Entity, collection: &'a [Entity]) -> Vec<&'a Entity> {
    collection
        .iter()
        .filter(|other| overlaps(entity, other))
        .collect()
}

/// Remove the given indices from `items`. `indices` must be ascending.
pub fn remove_indices<T>(items: &mut Vec<T>, indices: &[usize]) {
    for &idx in indices.iter().rev() {
        if idx < items.len() {
            items.remove(idx);
        }
    }
}
