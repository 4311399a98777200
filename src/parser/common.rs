use nom::{
    branch::alt,
    bytes::complete::{tag, take_while, take_while1},
    character::complete::{alpha1, char, multispace0},
    combinator::{map, recognize},
    sequence::{delimited, pair},
    IResult,
};

pub fn ws<'a, F, O>(inner: F) -> impl FnMut(&'a str) -> IResult<&'a str, O>
where
    F: FnMut(&'a str) -> IResult<&'a str, O>,
{
    delimited(multispace0, inner, multispace0)
}

/// Bare identifier: letter or underscore, then letters/digits/underscores
pub fn identifier(input: &str) -> IResult<&str, String> {
    map(
        recognize(pair(
            alt((alpha1, tag("_"))),
            take_while(|c: char| c.is_alphanumeric() || c == '_'),
        )),
        |s: &str| s.to_string(),
    )(input)
}

/// Identifier quoted with double quotes (SQL standard style)
pub fn quoted_identifier(input: &str) -> IResult<&str, String> {
    map(
        delimited(char('"'), take_while1(|c: char| c != '"'), char('"')),
        |s: &str| s.to_string(),
    )(input)
}

/// Identifier quoted with backticks (MySQL style)
pub fn backtick_identifier(input: &str) -> IResult<&str, String> {
    map(
        delimited(char('`'), take_while1(|c: char| c != '`'), char('`')),
        |s: &str| s.to_string(),
    )(input)
}

/// Any identifier form accepted by the catalog tooling
pub fn any_identifier(input: &str) -> IResult<&str, String> {
    alt((quoted_identifier, backtick_identifier, identifier))(input)
}

/// Single-quoted string literal ('abc')
pub fn quoted_string(input: &str) -> IResult<&str, String> {
    map(
        delimited(char('\''), take_while(|c: char| c != '\''), char('\'')),
        |s: &str| s.to_string(),
    )(input)
}
