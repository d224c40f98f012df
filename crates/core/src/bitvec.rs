//! Byte-packed code/data bitmap over bytecode positions.
//!
//! Bit `i` of the bitmap (most-significant bit first within each storage byte) is set iff byte
//! `i` of the bytecode is immediate data of a `PUSHn` instruction. An unset bit means the byte is
//! an opcode. The write primitives are sized to the PUSH data buckets (1, 2..=7, 8, 16 bits) so a
//! run of `n` data bytes costs a handful of byte stores instead of `n` single-bit writes.
//!
//! The batched writes touch up to two storage bytes past the byte holding their first bit, so
//! the bitmap carries [`PADDING_BYTES`] of slack past the nominal end of the code. Writes that
//! land there are never queried.

/// Slack bytes allocated past `len / 8 + 1` to absorb batched writes that overhang the code.
///
/// A `PUSH32` whose opcode is the last byte of the code starts its data at bit `len`. Its second
/// word write starts at bit `len + 16` and touches storage byte `len / 8 + 4`.
pub const PADDING_BYTES: usize = 4;

/// 16-bit windows with the top `n` bits set, indexed by `n` for `n` in `2..=7`.
const RUN_MASKS: [u16; 8] = [
    0,
    0,
    0b1100_0000_0000_0000,
    0b1110_0000_0000_0000,
    0b1111_0000_0000_0000,
    0b1111_1000_0000_0000,
    0b1111_1100_0000_0000,
    0b1111_1110_0000_0000,
];

/// Code/data classification bitmap for a single bytecode blob.
///
/// Built once by [`crate::analysis::code_bitmap`] and read-only afterwards. All writes assume
/// the scanner never produces overlapping runs: a storage byte that is assigned (rather than
/// OR-ed) must not have been written before, which is checked in debug builds.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct CodeBitmap {
    bits: Vec<u8>,
}

impl CodeBitmap {
    /// Allocates a zeroed bitmap of exactly `bytes` storage bytes.
    pub fn with_capacity(bytes: usize) -> Self {
        Self {
            bits: vec![0; bytes],
        }
    }

    /// Allocates a zeroed bitmap sized for `code_len` bytes of bytecode, padding included.
    pub fn for_code_len(code_len: usize) -> Self {
        Self::with_capacity(Self::required_bytes(code_len))
    }

    /// Number of storage bytes a bitmap needs to classify `code_len` bytes of bytecode.
    pub const fn required_bytes(code_len: usize) -> usize {
        code_len / 8 + 1 + PADDING_BYTES
    }

    /// Number of addressable bit positions, padding included.
    pub fn capacity_bits(&self) -> usize {
        self.bits.len() * 8
    }

    /// Raw storage bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bits
    }

    /// Zeroes every storage byte so the bitmap can be reused for another blob of the same size
    /// class.
    pub fn clear(&mut self) {
        self.bits.fill(0);
    }

    /// Marks the single byte at `pos` as data.
    #[inline]
    pub fn mark_one(&mut self, pos: usize) {
        self.bits[pos / 8] |= 0x80 >> (pos % 8);
    }

    /// Marks `n` contiguous bytes starting at `pos` as data, for `n` in `2..=7`.
    ///
    /// # Panics
    /// Panics if `n` is outside `2..=7` or the run does not fit in the bitmap.
    #[inline]
    pub fn mark_run_short(&mut self, n: usize, pos: usize) {
        assert!((2..=7).contains(&n), "short run length {n} out of range");
        let window = RUN_MASKS[n] >> (pos % 8);
        let idx = pos / 8;
        self.bits[idx] |= (window >> 8) as u8;
        let spill = window as u8;
        if spill != 0 {
            self.assign_fresh(idx + 1, spill);
        }
    }

    /// Marks exactly 8 contiguous bytes starting at `pos` as data.
    #[inline]
    pub fn mark_run_byte(&mut self, pos: usize) {
        let head = 0xFF >> (pos % 8);
        let idx = pos / 8;
        self.bits[idx] |= head;
        self.assign_fresh(idx + 1, !head);
    }

    /// Marks exactly 16 contiguous bytes starting at `pos` as data.
    #[inline]
    pub fn mark_run_word(&mut self, pos: usize) {
        let head = 0xFF >> (pos % 8);
        let idx = pos / 8;
        self.bits[idx] |= head;
        self.assign_fresh(idx + 1, 0xFF);
        self.assign_fresh(idx + 2, !head);
    }

    /// Returns `true` if the byte at `pos` is an opcode, `false` if it is PUSH data.
    #[inline]
    pub fn is_code(&self, pos: usize) -> bool {
        self.bits[pos / 8] & (0x80 >> (pos % 8)) == 0
    }

    /// Returns `true` if the byte at `pos` is PUSH data.
    #[inline]
    pub fn is_data(&self, pos: usize) -> bool {
        !self.is_code(pos)
    }

    /// Stores `value` into a storage byte that no earlier write has touched.
    #[inline]
    fn assign_fresh(&mut self, idx: usize, value: u8) {
        debug_assert_eq!(
            self.bits[idx], 0,
            "storage byte {idx} already written; data runs overlap"
        );
        self.bits[idx] = value;
    }
}
