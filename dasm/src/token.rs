//! The canonical symbol table: token kinds, keyword lookup and the register
//! predicate.

use std::fmt;

use num_derive::{FromPrimitive, ToPrimitive};
use num_traits::FromPrimitive;

use dcpu::{enum_to_word, BasicOp, ComplexOp};

/// Registers map to operand codes by position in this sequence, not by
/// alphabetical order: `I` and `J` follow `Z`.
pub const REGISTERS: &str = "ABCXYZIJ";

/// A token kind. The basic opcodes are declared in instruction-set order so
/// that the opcode value falls out of the variant's position.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug, FromPrimitive, ToPrimitive)]
pub enum Token {
    // Special tokens
    EMPTY,
    ILLEGAL,
    EOF,
    COMMENT,
    LABEL,

    // Values
    IDENT,
    REGISTER,
    INT,

    // Symbolic operands
    SP,
    PC,
    PUSH,
    PEEK,
    POP,
    O,

    // Basic opcodes
    SET,
    ADD,
    SUB,
    MUL,
    DIV,
    MOD,
    SHL,
    SHR,
    AND,
    BOR,
    XOR,
    IFE,
    IFN,
    IFG,
    IFB,

    // Complex opcodes
    JSR,

    // Data pseudo-op
    DAT,

    // Delimiters
    COMMA,
    LBRACK,
    RBRACK,
    PLUS,
    MINUS,
}

impl Token {
    pub fn is_basic_op(self) -> bool {
        Token::SET <= self && self <= Token::IFB
    }

    pub fn is_complex_op(self) -> bool {
        self == Token::JSR
    }

    pub fn is_op(self) -> bool {
        self.is_basic_op() || self.is_complex_op()
    }

    /// The basic opcode this token stands for, by position relative to `SET`.
    pub fn basic_op(self) -> Option<BasicOp> {
        if self.is_basic_op() {
            BasicOp::from_u16(enum_to_word(self) - enum_to_word(Token::SET) + 1)
        } else {
            None
        }
    }

    pub fn complex_op(self) -> Option<ComplexOp> {
        if self.is_complex_op() {
            Some(ComplexOp::JSR)
        } else {
            None
        }
    }

    /// The canonical spelling, used in error messages.
    pub fn name(self) -> &'static str {
        match self {
            Token::EMPTY => "EMPTY",
            Token::ILLEGAL => "ILLEGAL",
            Token::EOF => "EOF",
            Token::COMMENT => "COMMENT",
            Token::LABEL => "LABEL",
            Token::IDENT => "IDENT",
            Token::REGISTER => "REGISTER",
            Token::INT => "INT",
            Token::SP => "SP",
            Token::PC => "PC",
            Token::PUSH => "PUSH",
            Token::PEEK => "PEEK",
            Token::POP => "POP",
            Token::O => "O",
            Token::SET => "SET",
            Token::ADD => "ADD",
            Token::SUB => "SUB",
            Token::MUL => "MUL",
            Token::DIV => "DIV",
            Token::MOD => "MOD",
            Token::SHL => "SHL",
            Token::SHR => "SHR",
            Token::AND => "AND",
            Token::BOR => "BOR",
            Token::XOR => "XOR",
            Token::IFE => "IFE",
            Token::IFN => "IFN",
            Token::IFG => "IFG",
            Token::IFB => "IFB",
            Token::JSR => "JSR",
            Token::DAT => "DAT",
            Token::COMMA => "','",
            Token::LBRACK => "'['",
            Token::RBRACK => "']'",
            Token::PLUS => "'+'",
            Token::MINUS => "'-'",
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A token paired with its literal text. Literals are kept verbatim so the
/// parser decides how to interpret them (numeric bases, label names).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Lexeme {
    pub tok: Token,
    pub lit: String,
}

/// Looks an identifier up in the keyword table, case-insensitively against
/// the canonical uppercase form. Anything else is a plain identifier.
pub fn lookup(ident: &str) -> Token {
    match ident.to_ascii_uppercase().as_str() {
        "SP" => Token::SP,
        "PC" => Token::PC,
        "PUSH" => Token::PUSH,
        "PEEK" => Token::PEEK,
        "POP" => Token::POP,
        "O" => Token::O,
        "SET" => Token::SET,
        "ADD" => Token::ADD,
        "SUB" => Token::SUB,
        "MUL" => Token::MUL,
        "DIV" => Token::DIV,
        "MOD" => Token::MOD,
        "SHL" => Token::SHL,
        "SHR" => Token::SHR,
        "AND" => Token::AND,
        "BOR" => Token::BOR,
        "XOR" => Token::XOR,
        "IFE" => Token::IFE,
        "IFN" => Token::IFN,
        "IFG" => Token::IFG,
        "IFB" => Token::IFB,
        "JSR" => Token::JSR,
        "DAT" => Token::DAT,
        _ => Token::IDENT,
    }
}

/// The operand code for a register name, by position in [`REGISTERS`].
pub fn register_code(ident: &str) -> Option<u8> {
    let mut chars = ident.chars();
    let first = chars.next()?;
    if chars.next().is_some() {
        return None;
    }
    REGISTERS.find(first.to_ascii_uppercase()).map(|i| i as u8)
}

/// A single letter from `ABCXYZIJ`, case-insensitive.
pub fn is_register(ident: &str) -> bool {
    register_code(ident).is_some()
}
