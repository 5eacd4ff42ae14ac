//! Parse error type and categorization.
//!
//! Every failure is fatal to the parse and carries the position where the
//! offending token starts. The rendered form is pinned by compatibility
//! tests: `[line:L, column:C] <message>`.

use crate::position::StreamPosition;
use std::fmt;

/// Error kinds for categorizing parse errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A parameter name is empty.
    EmptyName,
    /// A node name consists only of whitespace.
    BlankName,
    /// A node name runs into a newline before its `:`.
    MultilineName,
    /// Non-whitespace content after a node header's `:`.
    TrailingContentAfterColon,
    /// A node with the same name already exists in the parent.
    DuplicateName,
    /// The `=` between a parameter name and its value is missing.
    MissingAssignment,
    /// A parameter's value is not on the same line as its name.
    ValueNotOnSameLine,
    /// A parameter has no value.
    MissingValue,
    /// A list element is empty.
    MissingListElement,
    /// Trailing content after a parameter value.
    OneParamPerLine,
    /// A quoted string is not closed before end of input.
    UnterminatedString,
    /// Content on the same line as a `###` list separator.
    BadListSeparatorLine,
    /// A malformed closing marker.
    InvalidClosingToken,
    /// An explicit attempt to close the document root.
    CannotCloseRoot,
    /// A close-by-name marker naming no open section.
    UnknownCloseTarget,
}

/// A fatal parse error with its source position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigError {
    /// Human-readable error message.
    pub message: String,
    /// Position where the offending token starts.
    pub position: StreamPosition,
    /// Error categorization.
    pub kind: ErrorKind,
}

impl ConfigError {
    /// Create an error from a kind, message and position.
    pub fn new(kind: ErrorKind, message: impl Into<String>, position: StreamPosition) -> Self {
        Self {
            message: message.into(),
            position,
            kind,
        }
    }

    pub(crate) fn empty_param_name(position: StreamPosition) -> Self {
        Self::new(
            ErrorKind::EmptyName,
            "Parameter's name can't be empty",
            position,
        )
    }

    pub(crate) fn blank_node_name(position: StreamPosition) -> Self {
        Self::new(
            ErrorKind::BlankName,
            "Config node name can't be blank",
            position,
        )
    }

    pub(crate) fn multiline_node_name(position: StreamPosition) -> Self {
        Self::new(
            ErrorKind::MultilineName,
            "Config node can't have a multiline name",
            position,
        )
    }

    pub(crate) fn trailing_content_after_colon(name: &str, position: StreamPosition) -> Self {
        Self::new(
            ErrorKind::TrailingContentAfterColon,
            format!(
                "Wrong config node '{name}' format: only whitespaces and comments \
                 can be placed on the same line with config node's name."
            ),
            position,
        )
    }

    pub(crate) fn duplicate_node(name: &str, position: StreamPosition) -> Self {
        Self::new(
            ErrorKind::DuplicateName,
            format!("Config node '{name}' already exist"),
            position,
        )
    }

    pub(crate) fn missing_assignment(name: &str, position: StreamPosition) -> Self {
        Self::new(
            ErrorKind::MissingAssignment,
            format!("Wrong param '{name}' format: missing '='"),
            position,
        )
    }

    pub(crate) fn value_not_on_same_line(name: &str, position: StreamPosition) -> Self {
        Self::new(
            ErrorKind::ValueNotOnSameLine,
            format!(
                "Wrong param '{name}' format: parameter's value must be placed \
                 on the same line as its name"
            ),
            position,
        )
    }

    pub(crate) fn missing_value(name: &str, position: StreamPosition) -> Self {
        Self::new(
            ErrorKind::MissingValue,
            format!("Parameter '{name}' value is missing"),
            position,
        )
    }

    pub(crate) fn missing_list_element(name: &str, position: StreamPosition) -> Self {
        Self::new(
            ErrorKind::MissingListElement,
            format!("Parameter list '{name}' element is missing"),
            position,
        )
    }

    pub(crate) fn one_param_per_line(name: &str, position: StreamPosition) -> Self {
        Self::new(
            ErrorKind::OneParamPerLine,
            format!("Wrong param '{name}' format: there must be only one parameter per line"),
            position,
        )
    }

    pub(crate) fn unterminated_string(position: StreamPosition) -> Self {
        Self::new(
            ErrorKind::UnterminatedString,
            "String isn't closed",
            position,
        )
    }

    pub(crate) fn bad_list_separator_line(name: &str, position: StreamPosition) -> Self {
        Self::new(
            ErrorKind::BadListSeparatorLine,
            format!(
                "Wrong config node list '{name}' format: there can't be anything \
                 besides comments and whitespaces on the same line with list separator '###'"
            ),
            position,
        )
    }

    pub(crate) fn invalid_closing_token(token: &str, position: StreamPosition) -> Self {
        Self::new(
            ErrorKind::InvalidClosingToken,
            format!("Invalid closing token '{token}'"),
            position,
        )
    }

    pub(crate) fn cannot_close_root(position: StreamPosition) -> Self {
        Self::new(ErrorKind::CannotCloseRoot, "Can't close root node", position)
    }

    pub(crate) fn unknown_close_target(name: &str, position: StreamPosition) -> Self {
        Self::new(
            ErrorKind::UnknownCloseTarget,
            format!("Can't close unexisting node '{name}'"),
            position,
        )
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.position, self.message)
    }
}

impl std::error::Error for ConfigError {}
