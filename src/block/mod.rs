//! Block values and the static tables that describe block types.

#[allow(clippy::module_inception)]
mod block;
pub mod data;
pub mod id;
pub mod metadata;

pub use block::{Block, BlockPayload};
pub use metadata::{
    attachment, can_pass_through, is_container, is_liquid, is_natural_terrain, is_translucent,
    place_order, uses_data, PlaceOrder,
};
