//! Recursive-descent node parser and the section-closing protocol.
//!
//! Each open section corresponds to one activation of [`parse_node`]. A
//! closing marker is not an error but a value — [`NodeReadResult`] — handed
//! up through the recursion; [`check_read_result`] decides at every level
//! whether the close has been satisfied or must keep bubbling. This is what
//! lets a single marker close any number of nested sections without the
//! writer counting depth.

use crate::error::ConfigError;
use crate::lexer::{is_blank, is_space, read_until, read_word, skip_whitespace};
use crate::params::parse_param;
use crate::position::StreamPosition;
use crate::stream::Stream;
use crate::tree::{ParamValue, Tree, TreeNode};

/// Parse a complete shoal document.
///
/// Returns the built tree, or the first error encountered; there is no
/// partial-tree recovery.
///
/// # Example
///
/// ```rust
/// let tree = shoal_core::parse("#server:\n  port = 8080\n").unwrap();
/// let server = tree.root().as_item().unwrap().node("server").unwrap();
/// let port = server.as_item().unwrap().param("port").unwrap();
/// assert_eq!(port.value(), Some("8080"));
/// ```
pub fn parse(input: &str) -> Result<Tree, ConfigError> {
    let mut stream = Stream::new(input);
    let mut tree = Tree::new();
    parse_node(&mut stream, tree.root_mut(), "")?;
    Ok(tree)
}

/// How a section body ended, reported to the enclosing recursion level.
#[derive(Debug, Clone, PartialEq, Eq)]
enum NodeReadResult {
    /// The close was absorbed at this level; keep reading.
    Continue,
    /// An unqualified `-` marker: close the enclosing section.
    ToParent { position: StreamPosition },
    /// A `--name` marker: close up to and including the named ancestor.
    ToNamed {
        name: String,
        position: StreamPosition,
    },
    /// A `---` marker or end of input: unwind to the document root.
    ToRoot,
}

/// Read a section header's name: the characters between `#` and `:`.
///
/// Nothing but whitespace and comments may follow the colon on its line.
fn read_node_name(stream: &mut Stream) -> Result<String, ConfigError> {
    let marker = stream.read(1);
    debug_assert_eq!(marker, "#");

    let mut name = String::new();
    while let Some(ch) = stream.peek_char() {
        if ch == '\n' {
            return Err(ConfigError::multiline_node_name(stream.position()));
        }
        if ch == ':' {
            stream.skip(1);
            let pos = stream.position();
            if !is_blank(&read_until(stream, |ch| ch == '\n')) {
                return Err(ConfigError::trailing_content_after_colon(&name, pos));
            }
            break;
        }
        stream.skip(1);
        name.push(ch);
    }
    Ok(name)
}

/// Parse a closing marker; the current character is known to be `-`.
///
/// `-` closes one level, `--name` closes up to the named ancestor, `---`
/// closes to the root. Anything else is malformed.
fn read_end_token(stream: &mut Stream) -> Result<NodeReadResult, ConfigError> {
    stream.skip(1);
    match stream.peek_char() {
        None => {
            return Ok(NodeReadResult::ToParent {
                position: stream.position(),
            })
        }
        Some(ch) if is_space(ch) => {
            return Ok(NodeReadResult::ToParent {
                position: stream.position(),
            })
        }
        Some(_) => {}
    }

    if stream.peek(2) == "--" {
        stream.skip(2);
        if let Some(ch) = stream.peek_char() {
            if !is_space(ch) {
                return Err(ConfigError::invalid_closing_token(
                    &format!("---{ch}"),
                    stream.position(),
                ));
            }
        }
        return Ok(NodeReadResult::ToRoot);
    }

    let position = stream.position();
    let next = stream.read(1);
    if next != "-" {
        return Err(ConfigError::invalid_closing_token(
            &format!("-{next}"),
            position,
        ));
    }

    let name = read_word(stream, "");
    Ok(NodeReadResult::ToNamed { name, position })
}

/// Reconcile a child's close signal against the node it bubbled into.
///
/// Decides whether the signal stops here, keeps bubbling, or is invalid.
/// A bare close inside a list also closes the list itself, and a close by
/// name matching a list closes the element and the list in one step.
fn check_read_result(
    result: NodeReadResult,
    node_name: &str,
    parent: &TreeNode,
) -> Result<NodeReadResult, ConfigError> {
    match result {
        NodeReadResult::ToRoot => {
            if parent.is_root() {
                Ok(NodeReadResult::Continue)
            } else {
                Ok(NodeReadResult::ToRoot)
            }
        }
        NodeReadResult::ToParent { position } if parent.is_list() => {
            if parent.is_root() {
                Err(ConfigError::cannot_close_root(position))
            } else {
                Ok(NodeReadResult::ToParent { position })
            }
        }
        NodeReadResult::ToNamed { name, position } => {
            if name != node_name {
                if parent.is_root() {
                    Err(ConfigError::unknown_close_target(&name, position))
                } else {
                    Ok(NodeReadResult::ToNamed { name, position })
                }
            } else if parent.is_list() {
                Ok(NodeReadResult::ToParent { position })
            } else {
                Ok(NodeReadResult::Continue)
            }
        }
        _ => Ok(NodeReadResult::Continue),
    }
}

/// Translate a reconciled signal into this level's loop decision:
/// `None` to keep reading the body, `Some(result)` to unwind with it.
fn unwind_or_continue(result: NodeReadResult) -> Option<NodeReadResult> {
    match result {
        NodeReadResult::Continue => None,
        // One level of the close is absorbed by the section ending here.
        NodeReadResult::ToParent { .. } => Some(NodeReadResult::Continue),
        other => Some(other),
    }
}

/// Parse one `###` list-element section.
fn parse_list_element_section(
    stream: &mut Stream,
    parent: &mut TreeNode,
    parent_name: &str,
) -> Result<Option<NodeReadResult>, ConfigError> {
    if !parent.is_list() {
        // `###` outside a list body ends the enclosing section without
        // consuming the marker.
        return Ok(Some(NodeReadResult::Continue));
    }

    stream.skip(3);
    skip_whitespace(stream, false);
    if stream.at_end() {
        return Ok(Some(NodeReadResult::ToRoot));
    }
    if stream.peek_char() != Some('\n') {
        return Err(ConfigError::bad_list_separator_line(
            parent_name,
            stream.position(),
        ));
    }

    skip_whitespace(stream, true);
    let result = if stream.at_end() {
        NodeReadResult::ToRoot
    } else if stream.peek_char() == Some('-') {
        read_end_token(stream)?
    } else {
        let position = stream.position();
        let list = parent
            .as_list_mut()
            .expect("list-ness is checked on entry");
        let element = list.append_element(position);
        parse_node(stream, element, parent_name)?
    };

    let result = check_read_result(result, parent_name, parent)?;
    Ok(unwind_or_continue(result))
}

/// Parse one `#name:` section header and its body.
fn parse_node_section(
    stream: &mut Stream,
    parent: &mut TreeNode,
) -> Result<Option<NodeReadResult>, ConfigError> {
    let pos = stream.position();
    let name = read_node_name(stream)?;
    if is_blank(&name) {
        return Err(ConfigError::blank_node_name(pos));
    }
    skip_whitespace(stream, true);

    let item = parent
        .as_item_mut()
        .expect("a list body only ever contains separators and closing markers");
    if item.has_node(&name) {
        return Err(ConfigError::duplicate_node(&name, pos));
    }
    // A section immediately followed by `###` is a list; decided once, here.
    let child = if stream.peek(3) == "###" {
        item.add_node_list(&name, pos)
    } else {
        item.add_node(&name, pos)
    };

    let result = parse_node(stream, child, &name)?;
    let result = check_read_result(result, &name, parent)?;
    Ok(unwind_or_continue(result))
}

/// Parse a section body until end of input or an unconsumed close signal.
fn parse_node(
    stream: &mut Stream,
    node: &mut TreeNode,
    node_name: &str,
) -> Result<NodeReadResult, ConfigError> {
    while let Some(next) = stream.peek_char() {
        if is_space(next) {
            stream.skip(1);
        } else if stream.peek(3) == "###" {
            if let Some(result) = parse_list_element_section(stream, node, node_name)? {
                return Ok(result);
            }
        } else if next == '#' {
            if let Some(result) = parse_node_section(stream, node)? {
                return Ok(result);
            }
        } else if next == '-' {
            return read_end_token(stream);
        } else {
            let (name, param) = parse_param(stream)?;
            let item = node
                .as_item_mut()
                .expect("a list body only ever contains separators and closing markers");
            match param.value {
                ParamValue::Scalar(value) => item.add_param(name, value, param.position),
                ParamValue::List(values) => item.add_param_list(name, values, param.position),
            }
        }
    }
    Ok(NodeReadResult::ToRoot)
}
