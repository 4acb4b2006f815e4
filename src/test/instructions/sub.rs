use crate::*;

#[test]
fn subtracts_registers() {
    let machine = instruction_runs! {
        [instr_basic!(SUB, reg!(A), reg!(B))],
        [A = 5678, B = 1234] => [A = 4444]
    };

    assert_eq!(machine.o(), 0);
}

#[test]
fn underflow_wraps_and_flags_overflow() {
    let machine = instruction_runs! {
        [instr_basic!(SUB, reg!(A), reg!(B))],
        [A = 0, B = 1] => [A = 0xFFFF]
    };

    assert_eq!(machine.o(), 0xFFFF);
}
