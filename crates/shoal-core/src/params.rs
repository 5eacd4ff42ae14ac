//! Parameter parsing: `name = value` entries.
//!
//! A value is a scalar, a comma-separated list on one line, or a bracketed
//! list that may span lines. Both list forms share one reading loop,
//! parameterized by the separator set and the terminator; a scalar is the
//! degenerate case where no comma was ever seen outside brackets.

use crate::error::ConfigError;
use crate::lexer::{read_quoted_string, read_until, read_word, skip_whitespace};
use crate::position::StreamPosition;
use crate::stream::Stream;
use crate::tree::{ParamValue, TreeParam};

/// Parse one parameter entry, leaving the stream just past its value.
pub fn parse_param(stream: &mut Stream) -> Result<(String, TreeParam), ConfigError> {
    skip_whitespace(stream, true);
    let param_pos = stream.position();
    let name = read_word(stream, "=");
    if name.is_empty() {
        return Err(ConfigError::empty_param_name(param_pos));
    }

    skip_param_whitespace(stream, &name)?;

    let pos = stream.position();
    if stream.read(1) != "=" {
        return Err(ConfigError::missing_assignment(&name, pos));
    }

    skip_param_whitespace(stream, &name)?;
    let param = read_param_value(stream, &name, param_pos)?;
    Ok((name, param))
}

/// Skip same-line whitespace; the value must not move to another line.
fn skip_param_whitespace(stream: &mut Stream, name: &str) -> Result<(), ConfigError> {
    skip_whitespace(stream, false);
    if stream.peek_char() == Some('\n') {
        return Err(ConfigError::value_not_on_same_line(name, stream.position()));
    }
    Ok(())
}

fn read_param_value(
    stream: &mut Stream,
    name: &str,
    pos: StreamPosition,
) -> Result<TreeParam, ConfigError> {
    skip_whitespace(stream, false);
    if stream.peek_char() == Some('\n') || stream.at_end() {
        return Err(ConfigError::missing_value(name, stream.position()));
    }

    if stream.peek_char() == Some('[') {
        stream.skip(1);
        skip_whitespace(stream, true);
        read_param_or_list(stream, name, pos, true)
    } else {
        read_param_or_list(stream, name, pos, false)
    }
}

/// Read one list element: a quoted string, or raw text up to a separator.
///
/// Unquoted elements stop only at the separator set (and line ends), so a
/// bare element may contain interior spaces; trailing whitespace before the
/// separator is not part of the value. An empty element is an error when it
/// follows a comma or when a scalar would end up with no content; the
/// single exception is the very first element of a bracketed list, where
/// emptiness means the list is `[]`.
fn read_single_element(
    stream: &mut Stream,
    separators: &str,
    values: &[String],
    name: &str,
    multiline: bool,
) -> Result<Option<String>, ConfigError> {
    let read = |stream: &mut Stream| -> Result<Option<String>, ConfigError> {
        if let Some(quoted) = read_quoted_string(stream)? {
            return Ok(Some(quoted));
        }
        let mut word = read_until(stream, |ch| ch == '\n' || separators.contains(ch));
        word.truncate(word.trim_end().len());
        if word.is_empty() {
            if stream.peek_char() == Some(',') || (values.is_empty() && !multiline) {
                return Err(ConfigError::missing_list_element(name, stream.position()));
            }
            if values.is_empty() && multiline {
                return Ok(None);
            }
        }
        Ok(Some(word))
    };

    // Brackets shield `;` so list elements can contain it literally.
    if multiline {
        stream.without_comments(read)
    } else {
        read(stream)
    }
}

fn read_param_or_list(
    stream: &mut Stream,
    name: &str,
    pos: StreamPosition,
    multiline: bool,
) -> Result<TreeParam, ConfigError> {
    let separators = if multiline { ",]" } else { "," };
    let terminator = if multiline { ']' } else { '\n' };
    let mut values = Vec::new();
    let mut is_list = multiline;

    while !stream.at_end() {
        if let Some(value) = read_single_element(stream, separators, &values, name, multiline)? {
            values.push(value);
        }

        skip_whitespace(stream, multiline);
        match stream.peek_char() {
            Some(',') => {
                is_list = true;
                stream.skip(1);
                skip_whitespace(stream, multiline);
                if stream.peek_char() == Some(terminator) || stream.at_end() {
                    return Err(ConfigError::missing_list_element(name, stream.position()));
                }
            }
            Some(ch) if ch == terminator => {
                stream.skip(1);
                return Ok(make_param(values, pos, is_list));
            }
            None => return Ok(make_param(values, pos, is_list)),
            Some(_) => return Err(ConfigError::one_param_per_line(name, stream.position())),
        }
    }
    Ok(make_param(values, pos, is_list))
}

fn make_param(values: Vec<String>, position: StreamPosition, is_list: bool) -> TreeParam {
    let value = if is_list {
        ParamValue::List(values)
    } else {
        // The scalar path errors out before ever reaching here empty.
        ParamValue::Scalar(values.into_iter().next().unwrap_or_default())
    };
    TreeParam { value, position }
}
