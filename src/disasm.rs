//! Renders word slices back to mnemonic form.
//!
//! Rendering is a pure function of the input slice: operand next-words are
//! consumed in lexical order, so the reported word counts always agree with
//! what the emulator would fetch.

use num_traits::FromPrimitive;

use crate::instr::{decode, ComplexOp, Instr, Register};
use crate::{constants, Word};

/// Renders one operand, returning the text and the next-words consumed.
pub fn value_string(code: u8, mem: &[Word]) -> (String, usize) {
    let next = mem.first().copied().unwrap_or(0);
    match code {
        0x00..=0x07 => (Register::from_code(code).to_string(), 0),
        0x08..=0x0F => (
            format!("[{}]", Register::from_code(code - constants::V_REG_IND)),
            0,
        ),
        0x10..=0x17 => (
            format!(
                "[{:#04x}+{}]",
                next,
                Register::from_code(code - constants::V_REG_NEXT)
            ),
            1,
        ),
        constants::V_POP => ("POP".to_string(), 0),
        constants::V_PEEK => ("PEEK".to_string(), 0),
        constants::V_PUSH => ("PUSH".to_string(), 0),
        constants::V_SP => ("SP".to_string(), 0),
        constants::V_PC => ("PC".to_string(), 0),
        constants::V_O => ("O".to_string(), 0),
        constants::V_NEXT_IND => (format!("[{:#04x}]", next), 1),
        constants::V_NEXT_LIT => (format!("{:#04x}", next), 1),
        _ => (format!("{:#02x}", code - constants::V_SHORT_LIT), 0),
    }
}

/// Renders the instruction at the start of `mem`, returning the text and the
/// total number of words it occupies.
pub fn instruction_string(mem: &[Word]) -> (String, usize) {
    let word = mem.first().copied().unwrap_or(0);
    let mut read = 1;

    match decode(word) {
        Instr::Basic { op, a, b } => {
            let (a_str, n) = value_string(a, &mem[read.min(mem.len())..]);
            read += n;
            let (b_str, n) = value_string(b, &mem[read.min(mem.len())..]);
            read += n;
            (format!("{} {}, {}", op, a_str, b_str), read)
        }
        Instr::Complex { op, a } => {
            let name = match ComplexOp::from_u16(op) {
                Some(op) => op.to_string(),
                None => "UNKNOWN".to_string(),
            };
            let (a_str, n) = value_string(a, &mem[read.min(mem.len())..]);
            read += n;
            (format!("{} {}", name, a_str), read)
        }
    }
}

/// Renders every instruction in `mem`, one per line.
pub fn disassemble(mem: &[Word]) -> String {
    let mut out = String::new();
    let mut offset = 0;
    while offset < mem.len() {
        let (text, read) = instruction_string(&mem[offset..]);
        out.push_str(&text);
        out.push('\n');
        offset += read;
    }
    out
}
