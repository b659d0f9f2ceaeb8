use nom::{
    IResult,
    bytes::complete::{tag, take_till},
    character::complete::{line_ending, space0},
    combinator::{eof, opt},
};

use crate::error::Error;

pub fn skip_whitespace(
    input: &str,
) -> std::result::Result<&str, nom::Err<nom::error::Error<&str>>> {
    space0(input).map(|(input, _)| input)
}

/// Skips whitespace, an optional `#` comment and the line break that ends the line.
///
/// Succeeds at the end of the input as well.
pub fn skip_line_end(input: &str) -> IResult<&str, ()> {
    let input = skip_whitespace(input)?;
    let (input, comment) = opt(tag("#"))(input)?;
    let input = if comment.is_some() {
        take_till(is_any_line_break)(input)?.0
    } else {
        input
    };

    if input.is_empty() {
        eof(input).map(|(input, _)| (input, ()))
    } else {
        line_ending(input).map(|(input, _)| (input, ()))
    }
}

/// Skips lines that contain nothing but whitespace or a comment.
pub fn skip_blank_lines(mut input: &str) -> IResult<&str, ()> {
    while !input.is_empty() {
        match skip_line_end(input) {
            Ok((remaining, ())) => input = remaining,
            Err(nom::Err::Error(_)) => break,
            Err(error) => return Err(error),
        }
    }

    Ok((input, ()))
}

pub fn is_any_line_break(c: char) -> bool {
    c == '\n' || c == '\r'
}

pub fn translate_nom_error(error: nom::Err<nom::error::Error<&str>>) -> Error {
    match error {
        nom::Err::Incomplete(needed) => Error::ParserIncomplete(needed),
        nom::Err::Error(error) | nom::Err::Failure(error) => Error::Parser {
            input: error.input.to_string(),
            kind: error.code,
        },
    }
}
