//! Emulator core for the DCPU-16, a 16-bit word-addressed processor.
//!
//! The crate is split into the machine itself and the pieces shared with the
//! rest of the toolchain:
//!
//! * [`Machine`](struct.Machine.html) owns the RAM, the eight general
//!   registers and the `PC`/`SP`/`O` special registers, and executes
//!   programs one instruction at a time via [`step`](struct.Machine.html#method.step)
//!   and [`exec`](struct.Machine.html#method.exec).
//! * The instruction codec ([`decode`](fn.decode.html),
//!   [`make_basic_instruction`](fn.make_basic_instruction.html) and friends)
//!   defines the bit-level layout of opcode words. The assembler and the
//!   disassembler use the same codec, so the encoding is specified in
//!   exactly one place.
//! * [`disasm`](disasm/index.html) renders word slices back to mnemonic
//!   form, [`debugger`](debugger/index.html) drives a machine step-wise.

pub mod constants;
pub mod debugger;
pub mod disasm;
mod instr;
mod machine;

pub use crate::instr::{
    decode, enum_to_word, instruction_words, make_basic_instruction, make_complex_instruction,
    operand_words, register_index, BasicOp, ComplexOp, Instr, Register,
};
pub use crate::machine::{Error, Machine, Target};

/// The native unit of RAM and registers.
pub type Word = u16;
