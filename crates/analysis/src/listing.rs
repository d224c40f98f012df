//! Annotated byte-by-byte listing of a bytecode blob.

use pushscan_core::CodeBitmap;
use pushscan_core::opcode::{self, PUSH1};
use std::fmt::{self, Write};

/// Classification of one listed byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// Opcode position, with its mnemonic if the byte is an assigned instruction.
    Opcode(Option<&'static str>),
    /// Immediate PUSH data.
    Data,
}

/// One byte of a listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListingLine {
    /// Offset of the byte in the bytecode.
    pub pc: usize,
    /// Raw byte value.
    pub byte: u8,
    /// Opcode or data.
    pub kind: LineKind,
    /// `PUSH1 0x00` starts here and could be written as `PUSH0`.
    pub push0_candidate: bool,
}

impl fmt::Display for ListingLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[ {} ] {:02x} ", self.pc, self.byte)?;
        match self.kind {
            LineKind::Opcode(Some(name)) => f.write_str(name),
            LineKind::Opcode(None) => f.write_str("UNKNOWN"),
            LineKind::Data => f.write_str("data"),
        }
    }
}

/// Iterator over every byte of `code` with its classification.
#[derive(Debug, Clone)]
pub struct Listing<'a> {
    code: &'a [u8],
    bitmap: &'a CodeBitmap,
    pc: usize,
}

impl<'a> Listing<'a> {
    /// Lists `code` using a bitmap built for it.
    pub const fn new(code: &'a [u8], bitmap: &'a CodeBitmap) -> Self {
        Self { code, bitmap, pc: 0 }
    }
}

impl Iterator for Listing<'_> {
    type Item = ListingLine;

    fn next(&mut self) -> Option<Self::Item> {
        let pc = self.pc;
        let byte = *self.code.get(pc)?;
        self.pc += 1;

        let is_code = self.bitmap.is_code(pc);
        let kind = if is_code {
            LineKind::Opcode(opcode::name(byte))
        } else {
            LineKind::Data
        };
        let push0_candidate = is_code && byte == PUSH1 && self.code.get(pc + 1) == Some(&0x00);

        Some(ListingLine {
            pc,
            byte,
            kind,
            push0_candidate,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let rest = self.code.len() - self.pc;
        (rest, Some(rest))
    }
}

impl ExactSizeIterator for Listing<'_> {}

/// Renders the full listing of one record: an `Address:` header, one line per byte and a
/// `>>> PUSH0` marker after every `PUSH1 0x00` candidate.
pub fn render(address: &str, code: &[u8], bitmap: &CodeBitmap) -> String {
    let mut out = String::with_capacity(16 * (code.len() + 1));
    let _ = writeln!(out, "Address: {address}");
    for line in Listing::new(code, bitmap) {
        let _ = writeln!(out, "{line}");
        if line.push0_candidate {
            out.push_str(">>> PUSH0\n");
        }
    }
    out
}
