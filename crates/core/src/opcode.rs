//! EVM opcode constants and the byte → mnemonic table.
//!
//! The scanner only needs the PUSH range; the mnemonic table exists for listings and
//! statistics. The table is a `static` built at compile time and never mutated.

/// Halts execution.
pub const STOP: u8 = 0x00;
/// Marks a valid jump destination, but only at a code position.
pub const JUMPDEST: u8 = 0x5b;
/// Pushes a zero word without immediate data (Shanghai).
pub const PUSH0: u8 = 0x5f;
/// First data-run opcode: one immediate byte.
pub const PUSH1: u8 = 0x60;
/// Last data-run opcode: thirty-two immediate bytes.
pub const PUSH32: u8 = 0x7f;

/// Number of immediate data bytes following `op`: `1..=32` for `PUSH1..=PUSH32`, 0 otherwise.
#[inline]
pub const fn push_data_len(op: u8) -> usize {
    if is_push(op) {
        (op - PUSH1) as usize + 1
    } else {
        0
    }
}

/// Returns `true` if `op` is followed by immediate data (`PUSH1..=PUSH32`).
#[inline]
pub const fn is_push(op: u8) -> bool {
    op >= PUSH1 && op <= PUSH32
}

/// Mnemonic for `op`, or `None` for bytes that are not assigned an instruction.
pub fn name(op: u8) -> Option<&'static str> {
    OPCODE_NAMES[op as usize]
}

/// Byte value → mnemonic for every assigned opcode.
pub static OPCODE_NAMES: [Option<&str>; 256] = build_names();

const PUSH_NAMES: [&str; 32] = [
    "PUSH1", "PUSH2", "PUSH3", "PUSH4", "PUSH5", "PUSH6", "PUSH7", "PUSH8", "PUSH9", "PUSH10",
    "PUSH11", "PUSH12", "PUSH13", "PUSH14", "PUSH15", "PUSH16", "PUSH17", "PUSH18", "PUSH19",
    "PUSH20", "PUSH21", "PUSH22", "PUSH23", "PUSH24", "PUSH25", "PUSH26", "PUSH27", "PUSH28",
    "PUSH29", "PUSH30", "PUSH31", "PUSH32",
];

const DUP_NAMES: [&str; 16] = [
    "DUP1", "DUP2", "DUP3", "DUP4", "DUP5", "DUP6", "DUP7", "DUP8", "DUP9", "DUP10", "DUP11",
    "DUP12", "DUP13", "DUP14", "DUP15", "DUP16",
];

const SWAP_NAMES: [&str; 16] = [
    "SWAP1", "SWAP2", "SWAP3", "SWAP4", "SWAP5", "SWAP6", "SWAP7", "SWAP8", "SWAP9", "SWAP10",
    "SWAP11", "SWAP12", "SWAP13", "SWAP14", "SWAP15", "SWAP16",
];

const LOG_NAMES: [&str; 5] = ["LOG0", "LOG1", "LOG2", "LOG3", "LOG4"];

const fn build_names() -> [Option<&'static str>; 256] {
    let mut t: [Option<&'static str>; 256] = [None; 256];

    // 0x00 range - stop & arithmetic
    t[0x00] = Some("STOP");
    t[0x01] = Some("ADD");
    t[0x02] = Some("MUL");
    t[0x03] = Some("SUB");
    t[0x04] = Some("DIV");
    t[0x05] = Some("SDIV");
    t[0x06] = Some("MOD");
    t[0x07] = Some("SMOD");
    t[0x08] = Some("ADDMOD");
    t[0x09] = Some("MULMOD");
    t[0x0a] = Some("EXP");
    t[0x0b] = Some("SIGNEXTEND");
    // 0x10 range - comparison & bitwise logic
    t[0x10] = Some("LT");
    t[0x11] = Some("GT");
    t[0x12] = Some("SLT");
    t[0x13] = Some("SGT");
    t[0x14] = Some("EQ");
    t[0x15] = Some("ISZERO");
    t[0x16] = Some("AND");
    t[0x17] = Some("OR");
    t[0x18] = Some("XOR");
    t[0x19] = Some("NOT");
    t[0x1a] = Some("BYTE");
    t[0x1b] = Some("SHL");
    t[0x1c] = Some("SHR");
    t[0x1d] = Some("SAR");
    t[0x20] = Some("SHA3");
    // 0x30 range - environment
    t[0x30] = Some("ADDRESS");
    t[0x31] = Some("BALANCE");
    t[0x32] = Some("ORIGIN");
    t[0x33] = Some("CALLER");
    t[0x34] = Some("CALLVALUE");
    t[0x35] = Some("CALLDATALOAD");
    t[0x36] = Some("CALLDATASIZE");
    t[0x37] = Some("CALLDATACOPY");
    t[0x38] = Some("CODESIZE");
    t[0x39] = Some("CODECOPY");
    t[0x3a] = Some("GASPRICE");
    t[0x3b] = Some("EXTCODESIZE");
    t[0x3c] = Some("EXTCODECOPY");
    t[0x3d] = Some("RETURNDATASIZE");
    t[0x3e] = Some("RETURNDATACOPY");
    t[0x3f] = Some("EXTCODEHASH");
    // 0x40 range - block information
    t[0x40] = Some("BLOCKHASH");
    t[0x41] = Some("COINBASE");
    t[0x42] = Some("TIMESTAMP");
    t[0x43] = Some("NUMBER");
    t[0x44] = Some("DIFFICULTY");
    t[0x45] = Some("GASLIMIT");
    t[0x46] = Some("CHAINID");
    t[0x47] = Some("SELFBALANCE");
    t[0x48] = Some("BASEFEE");
    // 0x50 range - stack, memory, storage & flow
    t[0x50] = Some("POP");
    t[0x51] = Some("MLOAD");
    t[0x52] = Some("MSTORE");
    t[0x53] = Some("MSTORE8");
    t[0x54] = Some("SLOAD");
    t[0x55] = Some("SSTORE");
    t[0x56] = Some("JUMP");
    t[0x57] = Some("JUMPI");
    t[0x58] = Some("PC");
    t[0x59] = Some("MSIZE");
    t[0x5a] = Some("GAS");
    t[0x5b] = Some("JUMPDEST");
    t[0x5f] = Some("PUSH0");

    // 0x60..0x9f - variable-length stack ops
    let mut i = 0;
    while i < 32 {
        t[PUSH1 as usize + i] = Some(PUSH_NAMES[i]);
        i += 1;
    }
    let mut i = 0;
    while i < 16 {
        t[0x80 + i] = Some(DUP_NAMES[i]);
        t[0x90 + i] = Some(SWAP_NAMES[i]);
        i += 1;
    }
    let mut i = 0;
    while i < 5 {
        t[0xa0 + i] = Some(LOG_NAMES[i]);
        i += 1;
    }

    // 0xf0 range - system
    t[0xf0] = Some("CREATE");
    t[0xf1] = Some("CALL");
    t[0xf2] = Some("CALLCODE");
    t[0xf3] = Some("RETURN");
    t[0xf4] = Some("DELEGATECALL");
    t[0xf5] = Some("CREATE2");
    t[0xfa] = Some("STATICCALL");
    t[0xfd] = Some("REVERT");
    t[0xfe] = Some("INVALID");
    t[0xff] = Some("SELFDESTRUCT");
    t
}
