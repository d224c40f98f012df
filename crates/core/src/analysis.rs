//! Code/data segmentation of raw bytecode.
//!
//! A single forward pass over the bytecode that marks the immediate data of every `PUSHn` in a
//! [`CodeBitmap`]. The cursor skips each data run as a whole, so a data byte that happens to
//! equal `JUMPDEST` (or any other opcode) is never read as an instruction.
//!
//! # Usage
//! ```rust
//! use pushscan_core::analysis::code_bitmap;
//!
//! // PUSH1 0x5b, JUMPDEST
//! let bitmap = code_bitmap(&[0x60, 0x5b, 0x5b]);
//! assert!(bitmap.is_code(0));
//! assert!(!bitmap.is_code(1));
//! assert!(bitmap.is_code(2));
//! ```

use crate::bitvec::CodeBitmap;
use crate::opcode::push_data_len;

/// Builds the code bitmap for `code`.
pub fn code_bitmap(code: &[u8]) -> CodeBitmap {
    let mut bits = CodeBitmap::for_code_len(code.len());
    code_bitmap_into(code, &mut bits);
    bits
}

/// Alias for [`code_bitmap`], named after the segmentation map it produces.
pub fn build_segmentation_map(code: &[u8]) -> CodeBitmap {
    code_bitmap(code)
}

/// Populates a caller-provided, zeroed bitmap for `code`.
///
/// Lets benchmarks and batch scans reuse one allocation across blobs. The bitmap must have been
/// cleared since its last use.
///
/// # Panics
/// Panics if `bits` holds fewer than [`CodeBitmap::required_bytes`]`(code.len())` bytes.
pub fn code_bitmap_into(code: &[u8], bits: &mut CodeBitmap) {
    assert!(
        bits.as_bytes().len() >= CodeBitmap::required_bytes(code.len()),
        "bitmap of {} bytes cannot cover {} bytes of code",
        bits.as_bytes().len(),
        code.len()
    );

    let mut pc = 0;
    while pc < code.len() {
        let op = code[pc];
        pc += 1;

        let mut n = push_data_len(op);
        if n == 0 {
            continue;
        }

        while n >= 16 {
            bits.mark_run_word(pc);
            pc += 16;
            n -= 16;
        }
        while n >= 8 {
            bits.mark_run_byte(pc);
            pc += 8;
            n -= 8;
        }
        match n {
            0 => {}
            1 => bits.mark_one(pc),
            _ => bits.mark_run_short(n, pc),
        }
        pc += n;
    }

    tracing::trace!(len = code.len(), end_pc = pc, "code bitmap built");
}
