use crate::*;

#[test]
fn adds_registers() {
    instruction_runs! {
        [instr_basic!(ADD, reg!(A), reg!(B))],
        [A = 40, B = 2] => [A = 42, B = 2]
    };
}

#[test]
fn wraps_and_sets_overflow() {
    let machine = instruction_runs! {
        [instr_basic!(ADD, reg!(A), reg!(B))],
        [A = 0xFFFF, B = 1] => [A = 0, B = 1]
    };

    assert_eq!(machine.o(), 1);
}

#[test]
fn clears_overflow_when_no_carry() {
    let mut machine = Machine::new();
    machine.load(&[
        instr_basic!(ADD, reg!(A), lit!(1)),
        instr_basic!(ADD, reg!(B), lit!(2)),
    ]);
    *machine.register_mut(Register::A) = 0xFFFF;

    machine.step().unwrap();
    assert_eq!(machine.o(), 1);

    machine.step().unwrap();
    assert_eq!(machine.o(), 0);
}
