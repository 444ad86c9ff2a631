//! Block value type

use std::hash::{Hash, Hasher};
use std::sync::Arc;

use super::{data, id};
use crate::math::FlipDirection;

/// Structured extra state a block may carry (container contents, sign text,
/// spawner settings). The edit engine never looks inside it.
pub type BlockPayload = serde_json::Value;

/// A block type with its auxiliary data value.
///
/// Equality and hashing look at type and data only; the payload rides along
/// untouched. A data value of [`Block::ANY_DATA`] is a wildcard that only
/// makes sense in search contexts, see [`Block::fuzzy_eq`].
#[derive(Clone, Debug, Default)]
pub struct Block {
    pub type_id: u16,
    pub data: i8,
    payload: Option<Arc<BlockPayload>>,
}

impl Block {
    /// Wildcard data value for matching.
    pub const ANY_DATA: i8 = -1;

    /// Empty/air block
    pub const AIR: Block = Block {
        type_id: id::AIR,
        data: 0,
        payload: None,
    };

    pub fn new(type_id: u16, data: i8) -> Self {
        Self {
            type_id,
            data,
            payload: None,
        }
    }

    /// Block of the given type with data 0.
    pub fn of(type_id: u16) -> Self {
        Self::new(type_id, 0)
    }

    /// Block of the given type matching any data value.
    pub fn any_data(type_id: u16) -> Self {
        Self::new(type_id, Self::ANY_DATA)
    }

    /// Attach a payload.
    pub fn with_payload(mut self, payload: BlockPayload) -> Self {
        self.payload = Some(Arc::new(payload));
        self
    }

    pub fn payload(&self) -> Option<&BlockPayload> {
        self.payload.as_deref()
    }

    pub fn is_air(&self) -> bool {
        self.type_id == id::AIR
    }

    /// Equality where a wildcard data value on either side matches anything.
    pub fn fuzzy_eq(&self, other: &Block) -> bool {
        self.type_id == other.type_id
            && (self.data == other.data || self.data == Self::ANY_DATA || other.data == Self::ANY_DATA)
    }

    /// Rotate the data value 90 degrees clockwise around the Y axis.
    pub fn rotate90(&mut self) {
        if self.data != Self::ANY_DATA {
            self.data = data::rotate90(self.type_id, self.data as i32) as i8;
        }
    }

    /// Rotate the data value 90 degrees counter-clockwise around the Y axis.
    pub fn rotate90_reverse(&mut self) {
        if self.data != Self::ANY_DATA {
            self.data = data::rotate90_reverse(self.type_id, self.data as i32) as i8;
        }
    }

    /// Mirror the data value across the given axis.
    pub fn flip(&mut self, direction: FlipDirection) {
        if self.data != Self::ANY_DATA {
            self.data = data::flip(self.type_id, self.data as i32, direction) as i8;
        }
    }
}

impl PartialEq for Block {
    fn eq(&self, other: &Self) -> bool {
        self.type_id == other.type_id && self.data == other.data
    }
}

impl Eq for Block {}

impl Hash for Block {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.type_id.hash(state);
        self.data.hash(state);
    }
}

impl From<u16> for Block {
    fn from(type_id: u16) -> Self {
        Block::of(type_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_air() {
        assert!(Block::AIR.is_air());
        assert!(Block::default().is_air());
        assert!(!Block::of(id::STONE).is_air());
    }

    #[test]
    fn test_equality_ignores_payload() {
        let plain = Block::new(id::SIGN_POST, 4);
        let signed = Block::new(id::SIGN_POST, 4)
            .with_payload(serde_json::json!({ "lines": ["hello"] }));
        assert_eq!(plain, signed);
        assert!(signed.payload().is_some());
    }

    #[test]
    fn test_fuzzy_eq() {
        let wool_red = Block::new(id::CLOTH, 14);
        assert!(Block::any_data(id::CLOTH).fuzzy_eq(&wool_red));
        assert!(wool_red.fuzzy_eq(&Block::any_data(id::CLOTH)));
        assert!(!Block::new(id::CLOTH, 1).fuzzy_eq(&wool_red));
        assert!(!Block::any_data(id::STONE).fuzzy_eq(&wool_red));
    }

    #[test]
    fn test_rotate_keeps_payload() {
        let mut chest = Block::new(id::CHEST, 2).with_payload(serde_json::json!({ "items": [] }));
        chest.rotate90();
        assert_eq!(chest.data, 5);
        assert!(chest.payload().is_some());
    }

    #[test]
    fn test_wildcard_is_never_rotated() {
        let mut any = Block::any_data(id::TORCH);
        any.rotate90();
        any.flip(FlipDirection::WestEast);
        assert_eq!(any.data, Block::ANY_DATA);
    }
}
