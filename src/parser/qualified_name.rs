use crate::core::error::MetadataError;
use nom::{
    character::complete::char,
    combinator::{all_consuming, map, opt},
    sequence::{pair, preceded},
    IResult,
};
use super::common::{any_identifier, ws};

/// Object path as typed by a user: `table`, `schema.table`, quoted forms
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QualifiedName {
    pub schema: Option<String>,
    pub object: String,
}

impl QualifiedName {
    #[must_use]
    pub fn to_display_string(&self) -> String {
        match &self.schema {
            Some(schema) => format!("{}.{}", quote_ident(schema), quote_ident(&self.object)),
            None => quote_ident(&self.object),
        }
    }
}

pub fn parse_qualified_name(input: &str) -> Result<QualifiedName, MetadataError> {
    match all_consuming(ws(qualified_name))(input) {
        Ok((_, name)) => Ok(name),
        Err(_) => Err(MetadataError::ParseError(format!(
            "invalid object name '{input}'"
        ))),
    }
}

fn qualified_name(input: &str) -> IResult<&str, QualifiedName> {
    map(
        pair(any_identifier, opt(preceded(char('.'), any_identifier))),
        |(first, second)| match second {
            Some(object) => QualifiedName {
                schema: Some(first),
                object,
            },
            None => QualifiedName {
                schema: None,
                object: first,
            },
        },
    )(input)
}

/// Quotes an identifier unless it is already a plain lowercase name
#[must_use]
pub fn quote_ident(name: &str) -> String {
    let plain = !name.is_empty()
        && name
            .chars()
            .next()
            .is_some_and(|c| c.is_ascii_lowercase() || c == '_')
        && name
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_');
    if plain {
        name.to_string()
    } else {
        format!("\"{}\"", name.replace('"', "\"\""))
    }
}
