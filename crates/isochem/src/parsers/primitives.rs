use nom::{
    IResult,
    character::complete::{anychar, satisfy, u32},
    combinator::{map_opt, opt, recognize},
    sequence::pair,
};

use crate::OffsetKind;

/// uppercase
///   = "A" | "B" | "C" | "D" | "E" | "F" | "G"
///   | "H" | "I" | "J" | "K" | "L" | "M" | "N"
///   | "O" | "P" | "Q" | "R" | "S" | "T" | "U"
///   | "V" | "W" | "X" | "Y" | "Z"
///   ;
pub fn uppercase(i: &str) -> IResult<&str, char> {
    satisfy(|c| c.is_ascii_uppercase())(i)
}

/// lowercase
///   = "a" | "b" | "c" | "d" | "e" | "f" | "g"
///   | "h" | "i" | "j" | "k" | "l" | "m" | "n"
///   | "o" | "p" | "q" | "r" | "s" | "t" | "u"
///   | "v" | "w" | "x" | "y" | "z"
///   ;
pub fn lowercase(i: &str) -> IResult<&str, char> {
    satisfy(|c| c.is_ascii_lowercase())(i)
}

/// Element Symbol = uppercase , [ lowercase ] ;
pub fn element_symbol(i: &str) -> IResult<&str, &str> {
    recognize(pair(uppercase, opt(lowercase)))(i)
}

/// Count = digit , { digit } ;
///
/// Leading zeroes are allowed, and so is zero itself: rejecting zero counts is left to the caller, which can report
/// it with more context. Counts that don't fit in a `u32` fail to parse.
pub fn count(i: &str) -> IResult<&str, u32> {
    u32(i)
}

/// Offset Kind = "+" | "-" ;
pub fn offset_kind(i: &str) -> IResult<&str, OffsetKind> {
    map_opt(anychar, OffsetKind::from_sign)(i)
}
