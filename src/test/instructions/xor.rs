use crate::*;

#[test]
fn toggles_register_bits() {
    instruction_runs! {
        [instr_basic!(XOR, reg!(A), reg!(B))],
        [A = 0xFF00, B = 0x0FF0] => [A = 0xF0F0]
    };
}
