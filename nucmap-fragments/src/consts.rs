//! SAM flag codes used to recognise properly paired, primary mates.
//!
//! Only the low 8 bits of a flag take part in classification, which strips the
//! secondary (0x100), QC-fail (0x200), duplicate (0x400) and supplementary
//! (0x800) bits.

pub const FRAGMENTS_CMD: &str = "fragments";

pub const FLAG_MASK: u16 = 0xFF;

/// paired, proper pair, mate reverse, first in pair (0x1 | 0x2 | 0x20 | 0x40)
pub const FORWARD_FIRST_MATE: u16 = 99;
/// paired, proper pair, read reverse, second in pair (0x1 | 0x2 | 0x10 | 0x80)
pub const FORWARD_SECOND_MATE: u16 = 147;
/// paired, proper pair, mate reverse, second in pair (0x1 | 0x2 | 0x20 | 0x80)
pub const REVERSE_FIRST_MATE: u16 = 163;
/// paired, proper pair, read reverse, first in pair (0x1 | 0x2 | 0x10 | 0x40)
pub const REVERSE_SECOND_MATE: u16 = 83;

pub const FORWARD_CODES: [u16; 2] = [FORWARD_FIRST_MATE, FORWARD_SECOND_MATE];
pub const REVERSE_CODES: [u16; 2] = [REVERSE_FIRST_MATE, REVERSE_SECOND_MATE];

/// mate reference column value meaning "same reference as the read"
pub const SAME_REFERENCE: &str = "=";

pub const DEFAULT_OUT: &str = "fragments.bed";
