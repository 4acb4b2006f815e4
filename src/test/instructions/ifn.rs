use crate::*;

#[test]
fn unequal_values_run_the_next_instruction() {
    let mut machine = Machine::new();
    machine.load(&[
        instr_basic!(IFN, reg!(A), lit!(1)),
        instr_basic!(SET, reg!(X), lit!(1)),
    ]);

    machine.step().unwrap();
    machine.step().unwrap();

    assert_eq!(machine.register(Register::X), 1);
}

#[test]
fn equal_values_skip_the_next_instruction() {
    let mut machine = Machine::new();
    machine.load(&[
        instr_basic!(IFN, reg!(A), reg!(B)),
        instr_basic!(SET, reg!(X), lit!(1)),
        instr_basic!(SET, reg!(Y), lit!(2)),
    ]);

    machine.step().unwrap();
    machine.step().unwrap();

    assert_eq!(machine.register(Register::X), 0);
    assert_eq!(machine.register(Register::Y), 2);
}
