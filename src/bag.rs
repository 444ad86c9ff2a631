//! Block supply for survival-style editing.

use std::collections::{HashMap, HashSet};

use thiserror::Error;

use crate::block::id;

/// Why a block could not be taken from a bag.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum BlockBagError {
    /// The block can never be supplied.
    #[error("Block cannot be placed from a bag")]
    Unplaceable,
    /// The block is supplied but none are left.
    #[error("Out of stock")]
    OutOfStock,
}

/// Source and sink for blocks placed and removed by a session.
pub trait BlockBag {
    /// Take one block to place it.
    fn fetch_placed_block(&mut self, type_id: u16, data: i8) -> Result<(), BlockBagError>;

    /// Return one block that was removed from the world.
    fn store_dropped_block(&mut self, type_id: u16, data: i8) -> Result<(), BlockBagError>;

    /// Persist pending changes to wherever the bag lives.
    fn flush_changes(&mut self) {}
}

/// Counted stock per block type.
#[derive(Clone, Debug)]
pub struct InventoryBag {
    stock: HashMap<u16, usize>,
    unplaceable: HashSet<u16>,
}

impl InventoryBag {
    pub fn new() -> Self {
        Self {
            stock: HashMap::new(),
            unplaceable: [
                id::BEDROCK,
                id::FIRE,
                id::PORTAL,
                id::END_PORTAL,
                id::PISTON_EXTENSION,
                id::PISTON_MOVING_PIECE,
            ]
            .into_iter()
            .collect(),
        }
    }

    pub fn with_stock(mut self, type_id: u16, count: usize) -> Self {
        self.add(type_id, count);
        self
    }

    pub fn add(&mut self, type_id: u16, count: usize) {
        *self.stock.entry(type_id).or_default() += count;
    }

    pub fn count(&self, type_id: u16) -> usize {
        self.stock.get(&type_id).copied().unwrap_or(0)
    }
}

impl Default for InventoryBag {
    fn default() -> Self {
        Self::new()
    }
}

impl BlockBag for InventoryBag {
    fn fetch_placed_block(&mut self, type_id: u16, _data: i8) -> Result<(), BlockBagError> {
        if self.unplaceable.contains(&type_id) {
            return Err(BlockBagError::Unplaceable);
        }
        match self.stock.get_mut(&type_id) {
            Some(n) if *n > 0 => {
                *n -= 1;
                Ok(())
            }
            _ => Err(BlockBagError::OutOfStock),
        }
    }

    fn store_dropped_block(&mut self, type_id: u16, _data: i8) -> Result<(), BlockBagError> {
        if self.unplaceable.contains(&type_id) {
            return Err(BlockBagError::Unplaceable);
        }
        self.add(type_id, 1);
        Ok(())
    }
}
