use crate::*;

#[test]
fn register_to_register() {
    instruction_runs! {
        [instr_basic!(SET, reg!(A), reg!(B))],
        [B = 0x1234] => [A = 0x1234, B = 0x1234]
    };
}

#[test]
fn short_literal() {
    instruction_runs! {
        [instr_basic!(SET, reg!(X), lit!(0x1F))],
        [] => [X = 0x1F]
    };
}

#[test]
fn next_word_literal() {
    let machine = instruction_runs! {
        [instr_basic!(SET, reg!(A), constants::V_NEXT_LIT), 0x2000],
        [] => [A = 0x2000]
    };

    assert_eq!(machine.pc(), 2);
}

#[test]
fn leaves_overflow_untouched() {
    let machine = instruction_runs! {
        [instr_basic!(SET, reg!(A), lit!(5))],
        [] => [A = 5]
    };

    assert_eq!(machine.o(), 0);
}
