//! Code/data segmentation for EVM bytecode.
//!
//! [`analysis::code_bitmap`] walks a bytecode blob once and returns a [`CodeBitmap`] recording,
//! for every byte, whether it is an opcode or immediate `PUSHn` data.

pub mod analysis;
pub mod bitvec;
pub mod opcode;

pub use analysis::{build_segmentation_map, code_bitmap, code_bitmap_into};
pub use bitvec::CodeBitmap;
