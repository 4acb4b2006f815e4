use crate::Word;

pub const RAM_WORDS: usize = 0x10000;
pub const REGISTER_COUNT: usize = 8;

// Opcode word layout. The low four bits select a basic opcode; when they are
// zero the word carries a complex opcode in the `a` position instead.
//
//           +------------+------------+----------+
//           |15        10|9          4|3        0|
//           +------------+------------+----------+
//  basic    |     b      |     a      |  opcode  |
//           +------------+------------+----------+
//  complex  |     a      |   opcode   |   0000   |
//           +------------+------------+----------+
pub const BASIC_OP_MASK: Word = 0xF;
pub const OPERAND_MASK: Word = 0x3F;

pub const A_OFFSET: u32 = 4;
pub const B_OFFSET: u32 = 10;
pub const COMPLEX_OP_OFFSET: u32 = 4;
pub const COMPLEX_A_OFFSET: u32 = 10;

// Operand codes. Codes 0x00-0x07 name a register directly, 0x08-0x0F the RAM
// cell a register points at, 0x10-0x17 a register-relative next-word address.
pub const V_REG_IND: u8 = 0x08;
pub const V_REG_NEXT: u8 = 0x10;
pub const V_POP: u8 = 0x18;
pub const V_PEEK: u8 = 0x19;
pub const V_PUSH: u8 = 0x1A;
pub const V_SP: u8 = 0x1B;
pub const V_PC: u8 = 0x1C;
pub const V_O: u8 = 0x1D;
pub const V_NEXT_IND: u8 = 0x1E;
pub const V_NEXT_LIT: u8 = 0x1F;
pub const V_SHORT_LIT: u8 = 0x20;

/// Largest literal that fits inline in an operand code.
pub const SHORT_LIT_MAX: Word = 0x1F;

/// Shift amounts are taken modulo the word width rounded up to 32.
pub const SHIFT_MASK: Word = 0x1F;
