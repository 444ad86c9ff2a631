//! Block counts over a region.

use std::collections::HashMap;
use std::hash::Hash;

use serde::{Deserialize, Serialize};

use crate::block::Block;
use crate::edit::EditSession;
use crate::region::Region;

/// A value with the number of times it was seen.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Countable<T> {
    pub id: T,
    pub amount: usize,
}

/// Count values, least frequent first. Ties keep first-seen order.
pub(crate) fn tally<T: Hash + Eq + Clone>(values: impl IntoIterator<Item = T>) -> Vec<Countable<T>> {
    let mut index: HashMap<T, usize> = HashMap::new();
    let mut counts: Vec<Countable<T>> = Vec::new();

    for value in values {
        match index.get(&value) {
            Some(&i) => counts[i].amount += 1,
            None => {
                index.insert(value.clone(), counts.len());
                counts.push(Countable { id: value, amount: 1 });
            }
        }
    }

    counts.sort_by_key(|c| c.amount);
    counts
}

impl EditSession<'_> {
    /// Count block types in a region.
    pub fn block_distribution(&self, region: &dyn Region) -> Vec<Countable<u16>> {
        tally(region.iter().map(|pos| self.block_type(pos)))
    }

    /// Count type and data pairs in a region.
    pub fn block_distribution_with_data(&self, region: &dyn Region) -> Vec<Countable<Block>> {
        tally(region.iter().map(|pos| {
            let block = self.get_block(pos);
            Block::new(block.type_id, block.data)
        }))
    }
}
