use crate::core::data_type::DataType;
use crate::core::error::MetadataError;
use nom::{
    branch::alt,
    bytes::complete::tag_no_case,
    character::complete::{char, digit1},
    combinator::{all_consuming, map, map_res, opt},
    multi::separated_list1,
    sequence::{delimited, tuple},
    IResult,
};
use super::common::{identifier, quoted_string, ws};

/// Parses the type text a catalog reports for a column
/// (e.g. `varchar(255)`, `numeric(10,2)`, `enum('new','paid')`).
pub fn parse_type_name(input: &str) -> Result<DataType, MetadataError> {
    match all_consuming(ws(data_type))(input) {
        Ok((_, data_type)) => Ok(data_type),
        Err(_) => Err(MetadataError::ParseError(format!(
            "unsupported column type '{input}'"
        ))),
    }
}

fn data_type(input: &str) -> IResult<&str, DataType> {
    alt((numeric_type, string_type, temporal_type, special_type))(input)
}

fn numeric_type(input: &str) -> IResult<&str, DataType> {
    alt((
        // Numeric types with precision/scale
        map(
            tuple((
                alt((tag_no_case("NUMERIC"), tag_no_case("DECIMAL"))),
                opt(delimited(
                    ws(char('(')),
                    tuple((
                        ws(map_res(digit1, |s: &str| s.parse::<u8>())),
                        opt(nom::sequence::preceded(
                            ws(char(',')),
                            ws(map_res(digit1, |s: &str| s.parse::<u8>())),
                        )),
                    )),
                    ws(char(')')),
                )),
            )),
            |(_, params)| match params {
                Some((p, Some(s))) => DataType::Numeric { precision: p, scale: s },
                Some((p, None)) => DataType::Numeric { precision: p, scale: 0 },
                None => DataType::Numeric { precision: 10, scale: 0 },
            },
        ),
        // MySQL reports BOOLEAN columns as tinyint(1)
        map(tag_no_case("TINYINT(1)"), |_| DataType::Boolean),
        // Integer types
        map(tag_no_case("SMALLINT"), |_| DataType::SmallInt),
        map(tag_no_case("INTEGER"), |_| DataType::Integer),
        map(tag_no_case("BIGINT"), |_| DataType::Integer),
        map(tag_no_case("INT"), |_| DataType::Integer),
        // Floating point
        map(tag_no_case("DOUBLE PRECISION"), |_| DataType::Real),
        map(tag_no_case("DOUBLE"), |_| DataType::Real),
        map(alt((tag_no_case("REAL"), tag_no_case("FLOAT"))), |_| DataType::Real),
    ))(input)
}

fn string_type(input: &str) -> IResult<&str, DataType> {
    alt((
        map(
            tuple((
                tag_no_case("VARCHAR"),
                opt(delimited(
                    ws(char('(')),
                    ws(map_res(digit1, |s: &str| s.parse::<usize>())),
                    ws(char(')')),
                )),
            )),
            |(_, len)| DataType::Varchar { max_length: len.unwrap_or(255) },
        ),
        map(
            tuple((
                tag_no_case("CHAR"),
                opt(delimited(
                    ws(char('(')),
                    ws(map_res(digit1, |s: &str| s.parse::<usize>())),
                    ws(char(')')),
                )),
            )),
            |(_, len)| DataType::Char { length: len.unwrap_or(1) },
        ),
        map(tag_no_case("TEXT"), |_| DataType::Text),
    ))(input)
}

fn temporal_type(input: &str) -> IResult<&str, DataType> {
    alt((
        map(tag_no_case("TIMESTAMPTZ"), |_| DataType::TimestampTz),
        map(tag_no_case("TIMESTAMP WITH TIME ZONE"), |_| DataType::TimestampTz),
        map(tag_no_case("TIMESTAMP WITHOUT TIME ZONE"), |_| DataType::Timestamp),
        map(tag_no_case("TIMESTAMP"), |_| DataType::Timestamp),
        map(tag_no_case("DATETIME"), |_| DataType::Timestamp),
        map(tag_no_case("DATE"), |_| DataType::Date),
    ))(input)
}

fn special_type(input: &str) -> IResult<&str, DataType> {
    alt((
        map(alt((tag_no_case("BOOLEAN"), tag_no_case("BOOL"))), |_| DataType::Boolean),
        map(tag_no_case("UUID"), |_| DataType::Uuid),
        map(tag_no_case("JSONB"), |_| DataType::Json),
        map(tag_no_case("JSON"), |_| DataType::Json),
        map(alt((tag_no_case("BYTEA"), tag_no_case("BLOB"))), |_| DataType::Bytea),
        // Inline MySQL enum with its value list in the type text
        map(
            tuple((
                tag_no_case("ENUM"),
                delimited(
                    ws(char('(')),
                    separated_list1(ws(char(',')), quoted_string),
                    ws(char(')')),
                ),
            )),
            |(_, values)| DataType::Enum { name: "enum".to_string(), values },
        ),
        // Custom named type - values unknown until resolved against the catalog
        map(identifier, |name| DataType::Enum { name, values: vec![] }),
    ))(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_types() {
        assert_eq!(parse_type_name("integer").unwrap(), DataType::Integer);
        assert_eq!(parse_type_name("INT").unwrap(), DataType::Integer);
        assert_eq!(parse_type_name("text").unwrap(), DataType::Text);
        assert_eq!(parse_type_name("date").unwrap(), DataType::Date);
        assert_eq!(parse_type_name("uuid").unwrap(), DataType::Uuid);
    }

    #[test]
    fn test_parameterized_types() {
        assert_eq!(
            parse_type_name("varchar(64)").unwrap(),
            DataType::Varchar { max_length: 64 }
        );
        assert_eq!(
            parse_type_name("varchar").unwrap(),
            DataType::Varchar { max_length: 255 }
        );
        assert_eq!(
            parse_type_name("numeric(10,2)").unwrap(),
            DataType::Numeric { precision: 10, scale: 2 }
        );
        assert_eq!(parse_type_name("char(3)").unwrap(), DataType::Char { length: 3 });
    }

    #[test]
    fn test_engine_specific_spellings() {
        assert_eq!(parse_type_name("tinyint(1)").unwrap(), DataType::Boolean);
        assert_eq!(parse_type_name("datetime").unwrap(), DataType::Timestamp);
        assert_eq!(
            parse_type_name("timestamp with time zone").unwrap(),
            DataType::TimestampTz
        );
        assert_eq!(parse_type_name("jsonb").unwrap(), DataType::Json);
    }

    #[test]
    fn test_inline_enum_values() {
        assert_eq!(
            parse_type_name("enum('new','paid','shipped')").unwrap(),
            DataType::Enum {
                name: "enum".to_string(),
                values: vec!["new".to_string(), "paid".to_string(), "shipped".to_string()],
            }
        );
    }

    #[test]
    fn test_custom_type_falls_back_to_named_enum() {
        assert_eq!(
            parse_type_name("order_status").unwrap(),
            DataType::Enum { name: "order_status".to_string(), values: vec![] }
        );
    }

    #[test]
    fn test_garbage_is_an_error() {
        assert!(parse_type_name("varchar(abc)").is_err());
        assert!(parse_type_name("123").is_err());
    }
}
