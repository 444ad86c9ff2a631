//! Dependency ordering for the final placement stage.
//!
//! Pending positions form a graph where each block points at the neighbour
//! it is attached to. Walking from any pending block along those edges and
//! then emitting the walk backwards writes supports before the blocks that
//! hang on them. Cycles are cut where they are found.

use std::collections::{HashMap, HashSet, VecDeque};

use crate::block::metadata::{attachment, is_door};
use crate::block::Block;
use crate::core::types::IVec3;

/// Reorder pending writes so that every block follows the pending block it
/// is attached to. Input order decides where each walk starts.
pub(crate) fn resolve_final_order(pending: Vec<(IVec3, Block)>) -> Vec<(IVec3, Block)> {
    let order: Vec<IVec3> = pending.iter().map(|(p, _)| *p).collect();
    let mut blocks: HashMap<IVec3, Block> = pending.into_iter().collect();
    let mut remaining: HashSet<IVec3> = blocks.keys().copied().collect();
    let mut out = Vec::with_capacity(blocks.len());

    for start in order {
        if !remaining.contains(&start) {
            continue;
        }

        let mut walked: VecDeque<IVec3> = VecDeque::new();
        let mut on_walk: HashSet<IVec3> = HashSet::new();
        let mut current = start;

        loop {
            walked.push_front(current);
            on_walk.insert(current);

            let Some(block) = blocks.get(&current) else {
                break;
            };
            let (type_id, data) = (block.type_id, block.data as i32);

            // A lower door half pulls its upper half in first
            if is_door(type_id) && data & 0x8 == 0 {
                let upper = current + IVec3::Y;
                if remaining.contains(&upper) && on_walk.insert(upper) {
                    walked.push_front(upper);
                }
            }

            let Some(direction) = attachment(type_id, data) else {
                break;
            };
            current += direction.offset();

            if !remaining.contains(&current) {
                break;
            }
            if on_walk.contains(&current) {
                log::warn!("Attachment cycle at {:?}, placing in walk order", current);
                break;
            }
        }

        for pos in walked {
            remaining.remove(&pos);
            if let Some(block) = blocks.remove(&pos) {
                out.push((pos, block));
            }
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::block::id;

    fn index_of(order: &[(IVec3, Block)], pos: IVec3) -> usize {
        order.iter().position(|(p, _)| *p == pos).unwrap()
    }

    #[test]
    fn test_door_upper_before_lower_from_either_start() {
        let lower = IVec3::new(0, 5, 0);
        let upper = IVec3::new(0, 6, 0);

        for pending in [
            vec![(lower, Block::new(id::WOODEN_DOOR, 1)), (upper, Block::new(id::WOODEN_DOOR, 8))],
            vec![(upper, Block::new(id::WOODEN_DOOR, 8)), (lower, Block::new(id::WOODEN_DOOR, 1))],
        ] {
            let order = resolve_final_order(pending);
            assert_eq!(order.len(), 2);
            assert!(index_of(&order, upper) < index_of(&order, lower));
        }
    }

    #[test]
    fn test_support_written_first() {
        // Cactus stacked on cactus: the lower one supports the upper one
        let bottom = IVec3::new(0, 1, 0);
        let top = IVec3::new(0, 2, 0);
        let order = resolve_final_order(vec![
            (top, Block::of(id::CACTUS)),
            (bottom, Block::of(id::CACTUS)),
        ]);
        assert_eq!(order[0].0, bottom);
        assert_eq!(order[1].0, top);
    }

    #[test]
    fn test_every_entry_written_once() {
        let pending: Vec<_> = (0..10)
            .map(|y| (IVec3::new(0, y, 0), Block::of(id::REED)))
            .chain((0..4).map(|x| (IVec3::new(x + 5, 0, 0), Block::new(id::WALL_SIGN, 2))))
            .collect();
        let order = resolve_final_order(pending.clone());
        assert_eq!(order.len(), pending.len());
        let unique: HashSet<_> = order.iter().map(|(p, _)| *p).collect();
        assert_eq!(unique.len(), pending.len());
    }

    #[test]
    fn test_cycle_terminates() {
        // Two wall signs facing each other form a two-node cycle
        let a = IVec3::new(0, 0, 0);
        let b = IVec3::new(-1, 0, 0);
        let order = resolve_final_order(vec![
            (a, Block::new(id::WALL_SIGN, 2)),
            (b, Block::new(id::WALL_SIGN, 3)),
        ]);
        assert_eq!(order.len(), 2);
    }
}
