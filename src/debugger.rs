//! Helpers for driving a [`Machine`](../struct.Machine.html) step-wise.

use crate::disasm;
use crate::instr::Register;
use crate::machine::{Error, Machine};
use crate::Word;

/// Low ten bits of a `SET PC, ...` opcode word: opcode `SET` with the
/// destination operand code `PC`.
const JMP_MASK: Word = 0x03FF;
const JMP_WORD: Word = 0x01C1;

/// Steps until the program counter is unchanged by a step, which catches a
/// single-instruction branch-to-self, or an error occurs.
pub fn step_loop(machine: &mut Machine) -> Result<(), Error> {
    loop {
        let last_pc = machine.pc();
        machine.step()?;
        if machine.pc() == last_pc {
            return Ok(());
        }
    }
}

/// Steps until the word at `PC` is a `SET PC, ...` instruction, and stops
/// without executing it.
pub fn step_jmp(machine: &mut Machine) -> Result<(), Error> {
    while machine.ram()[machine.pc() as usize] & JMP_MASK != JMP_WORD {
        machine.step()?;
    }
    Ok(())
}

/// Formats the registers `A..J` as hex.
pub fn rdump(machine: &Machine) -> String {
    let mut out = String::new();
    for (index, word) in machine.registers().iter().enumerate() {
        out.push_str(&format!(
            " {}: {:#06x}",
            Register::from_code(index as u8),
            word
        ));
    }
    out
}

/// Renders the instruction at `PC`.
pub fn instruction_at(machine: &Machine) -> String {
    let (text, _) = disasm::instruction_string(&machine.ram()[machine.pc() as usize..]);
    text
}
