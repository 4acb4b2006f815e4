use crate::*;

#[test]
fn push_then_pop_round_trips() {
    let mut machine = Machine::new();
    machine.load(&[
        instr_basic!(SET, constants::V_PUSH, lit!(0x12)),
        instr_basic!(SET, reg!(Y), constants::V_POP),
    ]);

    machine.step().unwrap();
    assert_eq!(machine.sp(), 0xFFFF);
    assert_eq!(machine.ram()[0xFFFF], 0x12);

    machine.step().unwrap();
    assert_eq!(machine.register(Register::Y), 0x12);
    assert_eq!(machine.sp(), 0);
}

#[test]
fn peek_reads_without_moving_sp() {
    let mut machine = Machine::new();
    machine.load(&[
        instr_basic!(SET, constants::V_PUSH, lit!(5)),
        instr_basic!(SET, reg!(Z), constants::V_PEEK),
    ]);

    machine.step().unwrap();
    machine.step().unwrap();

    assert_eq!(machine.register(Register::Z), 5);
    assert_eq!(machine.sp(), 0xFFFF);
}

#[test]
fn sp_is_a_writable_location() {
    let mut machine = Machine::new();
    machine.load(&[
        instr_basic!(SET, constants::V_SP, lit!(0x10)),
        instr_basic!(SET, constants::V_PUSH, lit!(9)),
    ]);

    machine.step().unwrap();
    machine.step().unwrap();

    assert_eq!(machine.sp(), 0x0F);
    assert_eq!(machine.ram()[0x0F], 9);
}
