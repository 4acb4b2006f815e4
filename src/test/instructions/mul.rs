use crate::*;

#[test]
fn multiplies_registers() {
    let machine = instruction_runs! {
        [instr_basic!(MUL, reg!(A), reg!(B))],
        [A = 6, B = 7] => [A = 42]
    };

    assert_eq!(machine.o(), 0);
}

#[test]
fn stores_high_half_in_overflow() {
    let machine = instruction_runs! {
        [instr_basic!(MUL, reg!(A), reg!(B))],
        [A = 0x8000, B = 4] => [A = 0]
    };

    assert_eq!(machine.o(), 2);
}
