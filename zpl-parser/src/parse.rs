use nom::{
    IResult, Parser,
    branch::alt,
    bytes::complete::take_till,
    character::complete::{anychar, digit1, one_of, satisfy, space0},
    combinator::{map, opt, recognize},
    multi::many0,
    number::complete::recognize_float,
    sequence::preceded,
};

use crate::commands::Token;

fn is_control(c: char) -> bool {
    c == '^' || c == '~'
}

fn parse_command_name(input: &str) -> IResult<&str, &str> {
    // Matches e.g. "^FO", "^A0", "^A@", "~DG"
    recognize((
        one_of("^~"),
        satisfy(|c| c.is_ascii_uppercase()),
        satisfy(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || c == '@'),
    ))
    .parse(input)
}

fn parse_params(input: &str) -> IResult<&str, &str> {
    take_till(is_control).parse(input)
}

fn parse_token(input: &str) -> IResult<&str, Token<'_>> {
    let (remaining, (name, params)) = (parse_command_name, parse_params).parse(input)?;

    // ^A0N,30 is the short form of ^A with the font name glued to the command
    if name.starts_with("^A") && !name.ends_with('@') {
        let consumed = &input[..input.len() - remaining.len()];
        let (command, params) = consumed.split_at(2);
        return Ok((remaining, Token::new(command, params)));
    }

    Ok((remaining, Token::new(name, params)))
}

fn skip_garbage(input: &str) -> IResult<&str, ()> {
    // Anything that is not a well formed command runs to the next control char
    map((anychar, take_till(is_control)), |_| ()).parse(input)
}

fn parse_zpl_item(input: &str) -> IResult<&str, Option<Token<'_>>> {
    alt((map(parse_token, Some), map(skip_garbage, |_| None))).parse(input)
}

/// Splits a command stream into tokens, in input order.
///
/// The input is expected without the `^XA`/`^XZ` markers, although keeping them
/// only adds two more tokens. Malformed text is skipped, never reported.
pub fn tokenize(input: &str) -> Vec<Token<'_>> {
    match many0(parse_zpl_item).parse(input) {
        Ok((_, items)) => items.into_iter().flatten().collect(),
        Err(_) => Vec::new(),
    }
}

/// Comma separated parameter fields, each trimmed. Blank input has no fields.
pub fn split_params(params: &str) -> Vec<&str> {
    let params = params.trim();
    if params.is_empty() {
        return Vec::new();
    }
    params.split(',').map(str::trim).collect()
}

fn leading_int(input: &str) -> IResult<&str, &str> {
    preceded(space0, recognize((opt(one_of("+-")), digit1))).parse(input)
}

fn leading_float(input: &str) -> IResult<&str, &str> {
    preceded(space0, recognize_float).parse(input)
}

/// Leading integer of a parameter, ignoring whatever follows it.
///
/// `"50dots"` reads as 50, `"abc"` and `""` read as `None`.
pub fn parse_int(value: &str) -> Option<i64> {
    let (_, digits) = leading_int(value).ok()?;
    digits.parse().ok()
}

/// Leading decimal number of a parameter, see [`parse_int`].
pub fn parse_float(value: &str) -> Option<f64> {
    let (_, number) = leading_float(value).ok()?;
    number.parse().ok()
}
