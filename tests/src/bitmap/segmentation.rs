use proptest::prelude::*;
use pushscan_core::opcode::{JUMPDEST, PUSH1, PUSH32, STOP, push_data_len};
use pushscan_core::{CodeBitmap, build_segmentation_map, code_bitmap};

fn code_positions(code: &[u8]) -> Vec<bool> {
    let bitmap = code_bitmap(code);
    (0..code.len()).map(|pc| bitmap.is_code(pc)).collect()
}

/// Jump destinations the way an interpreter would collect them: JUMPDEST bytes at code
/// positions only.
fn jumpdests(code: &[u8], bitmap: &CodeBitmap) -> Vec<usize> {
    (0..code.len())
        .filter(|&pc| code[pc] == JUMPDEST && bitmap.is_code(pc))
        .collect()
}

#[test]
fn push1_then_zero() {
    let bitmap = build_segmentation_map(&[0x60, 0x00]);
    assert!(bitmap.is_code(0));
    assert!(!bitmap.is_code(1));
}

#[test]
fn push32_run_then_stop() {
    let mut code = vec![0x7f];
    code.extend([0xaa; 32]);
    code.push(0x00);

    let bitmap = build_segmentation_map(&code);
    assert!(bitmap.is_code(0));
    assert!((1..=32).all(|pc| !bitmap.is_code(pc)));
    assert!(bitmap.is_code(33));
}

#[test]
fn jumpdest_inside_push_data_is_not_a_destination() {
    let code = [0x60, 0x5b];
    let bitmap = build_segmentation_map(&code);
    assert!(!bitmap.is_code(1));
    assert!(jumpdests(&code, &bitmap).is_empty());
}

#[test]
fn erc20_style_prologue() {
    // PUSH1 0x80 PUSH1 0x40 MSTORE CALLVALUE DUP1 ISZERO PUSH2 0x0010 JUMPI PUSH1 0x00 DUP1
    // REVERT JUMPDEST POP
    let code = hex::decode("608060405234801561001057600080fd5b50").unwrap();
    let bitmap = code_bitmap(&code);
    let data: Vec<usize> = (0..code.len()).filter(|&pc| !bitmap.is_code(pc)).collect();
    assert_eq!(data, vec![1, 3, 9, 10, 13]);
    assert_eq!(jumpdests(&code, &bitmap), vec![16]);
}

#[test]
fn single_push_of_every_width() {
    for op in PUSH1..=PUSH32 {
        let n = push_data_len(op);
        let mut code = vec![op];
        code.extend(std::iter::repeat_n(JUMPDEST, n));
        code.extend([JUMPDEST, STOP]);

        let classes = code_positions(&code);
        assert!(classes[0]);
        assert!(classes[1..=n].iter().all(|c| !c), "PUSH{n}");
        assert!(classes[n + 1..].iter().all(|c| *c), "PUSH{n}");
    }
}

#[test]
fn push32_overhanging_the_end() {
    for len in 5..=64 {
        let mut code = vec![0x01; len];
        code[len - 5] = PUSH32;
        let classes = code_positions(&code);
        assert!(classes[..=len - 5].iter().all(|c| *c));
        assert!(classes[len - 4..].iter().all(|c| !c));
    }
}

/// Straightforward classifier: walk instructions and flag each immediate byte.
fn reference(code: &[u8]) -> Vec<bool> {
    let mut is_code = vec![true; code.len()];
    let mut pc = 0;
    while pc < code.len() {
        let n = push_data_len(code[pc]);
        for slot in is_code.iter_mut().skip(pc + 1).take(n) {
            *slot = false;
        }
        pc += n + 1;
    }
    is_code
}

proptest! {
    #[test]
    fn agrees_with_reference(code in proptest::collection::vec(any::<u8>(), 0..1024)) {
        prop_assert_eq!(code_positions(&code), reference(&code));
    }

    #[test]
    fn push_free_code_is_all_code(
        code in proptest::collection::vec(any::<u8>().prop_filter("no PUSHn", |b| push_data_len(*b) == 0), 0..256)
    ) {
        prop_assert!(code_positions(&code).into_iter().all(|c| c));
    }

    #[test]
    fn classification_is_repeatable(code in proptest::collection::vec(any::<u8>(), 0..256)) {
        let bitmap = code_bitmap(&code);
        let first: Vec<bool> = (0..code.len()).map(|pc| bitmap.is_code(pc)).collect();
        let second: Vec<bool> = (0..code.len()).rev().map(|pc| bitmap.is_code(pc)).rev().collect();
        prop_assert_eq!(&first, &second);
        prop_assert_eq!(first, code_positions(&code));
    }
}
