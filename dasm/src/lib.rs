//! Assembler for the DCPU-16.
//!
//! The entry point is [`assemble`](fn.assemble.html), which takes assembly
//! source bytes and produces the program as a sequence of 16-bit words. The
//! word encoding itself comes from the [`dcpu`](../dcpu/index.html) crate, so
//! the assembler, the emulator and the disassembler share one codec.
//!
//! # Assembly language
//!
//! A program is a flat list of instructions, label definitions and `DAT`
//! rows. Comments start with `;` and run to the end of the line.
//!
//! ```text
//! ; sum the values 10..1 into A
//!         SET I, 10
//! :loop   ADD A, I
//!         SUB I, 1
//!         IFN I, 0
//!             SET PC, loop
//! :done   SET PC, done
//! ```
//!
//! ## Instructions
//!
//! Basic opcodes take two operands (`SET A, 0x30`); the complex opcode `JSR`
//! takes one. Available basic opcodes: `SET ADD SUB MUL DIV MOD SHL SHR AND
//! BOR XOR IFE IFN IFG IFB`. Mnemonics are case-insensitive.
//!
//! ## Operands
//!
//! Operand        | Example        | Meaning
//! ---------------|----------------|--------------------------------------
//! register       | `A`            | one of `A B C X Y Z I J`
//! indirect       | `[A]`          | the RAM cell `A` points at
//! indexed        | `[0x2000+I]`   | RAM at a constant plus a register
//! address        | `[0x1000]`     | RAM at a constant address
//! literal        | `0x30`         | an unsigned 16-bit constant
//! label          | `loop`         | the label's word offset
//! stack          | `PUSH`, `PEEK`, `POP` | top-of-stack access
//! special        | `SP`, `PC`, `O` | the machine's special registers
//!
//! Inside `[ ]` any sum of integer literals and at most one register is
//! accepted, with `+` and `-` as operators; the constants fold into a single
//! extra word with wrapping 16-bit arithmetic.
//!
//! Integer literals may be decimal, hexadecimal (`0x` prefix) or octal
//! (leading `0`). Literals up to `0x1F` are packed into the opcode word;
//! larger values and label references occupy a following word.
//!
//! ## Labels and data
//!
//! `:name` binds a label to the current output offset; referencing a label
//! that is never defined is an error, as is defining one twice. Forward
//! references are resolved in a second pass over the reserved slots.
//!
//! `DAT 1, 2, 0x8000` emits its literals verbatim, one word each.

mod error;
mod parser;
pub mod scanner;
pub mod token;


use log::debug;

use dcpu::Word;

use crate::scanner::Scanner;
use crate::token::{Lexeme, Token};

pub use crate::error::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Assembles source text into a word sequence.
pub fn assemble(src: &[u8]) -> Result<Vec<Word>> {
    let mut scanner = Scanner::new(src);
    let mut tokens = Vec::new();
    loop {
        let (tok, lit) = scanner.scan();
        let done = tok == Token::EOF;
        tokens.push(Lexeme { tok, lit });
        if done {
            break;
        }
    }

    let gen = parser::Parser::parse(tokens)?;
    debug!(target: "dasm", "assembled {} words", gen.len());
    Ok(gen)
}
