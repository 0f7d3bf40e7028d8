//! The two byte container header: 3 bits of trash count and 13 bits of tree size, packed
//! into one big-endian word as `(trash << 13) | tree_size`.

const TREE_SIZE_MASK: u16 = 0x1FFF;
const TRASH_SHIFT: u16 = 13;

/// Padding bits in the final body byte, and the number of nodes in the serialized tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Header {
    pub trash: u8,
    pub tree_size: u16,
}

impl Header {
    /// Build a header. `trash` must fit in 3 bits and `tree_size` in 13.
    pub fn new(trash: u8, tree_size: u16) -> Self {
        debug_assert!(
            trash < 8 && tree_size <= TREE_SIZE_MASK,
            "header fields out of range: trash {}, tree size {}",
            trash,
            tree_size
        );
        Self {
            trash: trash & 0x07,
            tree_size: tree_size & TREE_SIZE_MASK,
        }
    }

    /// Padding needed to complete the final byte after `total_bits` bits of body.
    pub fn trash_for(total_bits: u64) -> u8 {
        ((8 - total_bits % 8) % 8) as u8
    }

    pub fn pack(&self) -> u16 {
        (self.trash as u16) << TRASH_SHIFT | self.tree_size
    }

    pub fn unpack(word: u16) -> Self {
        Self {
            trash: (word >> TRASH_SHIFT) as u8,
            tree_size: word & TREE_SIZE_MASK,
        }
    }

    pub fn to_bytes(&self) -> [u8; 2] {
        self.pack().to_be_bytes()
    }

    pub fn from_bytes(bytes: [u8; 2]) -> Self {
        Self::unpack(u16::from_be_bytes(bytes))
    }
}
