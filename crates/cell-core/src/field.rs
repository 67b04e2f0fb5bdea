//! Field-level lexing for cell streams.
//!
//! A field is one whitespace-delimited token. These recognisers decide
//! whether a whole field is an integer or a real number; anything that does
//! not match completely is a format error at the reader level.

use nom::{
    branch::alt,
    character::complete::{char, digit0, digit1, one_of},
    combinator::{all_consuming, opt, recognize},
    sequence::{pair, tuple},
    IResult,
};

/// Recognise an optionally signed decimal integer.
pub fn integer(input: &str) -> IResult<&str, &str> {
    recognize(pair(opt(one_of("+-")), digit1))(input)
}

/// Recognise an optionally signed real number (`12`, `-3.`, `.5`, `1.5e-3`).
pub fn real(input: &str) -> IResult<&str, &str> {
    recognize(tuple((
        opt(one_of("+-")),
        alt((
            recognize(pair(digit1, opt(pair(char('.'), digit0)))),
            recognize(pair(char('.'), digit1)),
        )),
        opt(tuple((one_of("eE"), opt(one_of("+-")), digit1))),
    )))(input)
}

/// Convert a complete field to an `i32`.
pub fn parse_integer(field: &str) -> Option<i32> {
    let (_, text) = all_consuming(integer)(field).ok()?;
    text.parse().ok()
}

/// Convert a complete field to a finite `f64`.
pub fn parse_real(field: &str) -> Option<f64> {
    let (_, text) = all_consuming(real)(field).ok()?;
    text.parse::<f64>().ok().filter(|value| value.is_finite())
}

/// Booleans are stored as the integers `0` and `1`.
pub fn parse_bool(field: &str) -> Option<bool> {
    match parse_integer(field)? {
        0 => Some(false),
        1 => Some(true),
        _ => None,
    }
}
