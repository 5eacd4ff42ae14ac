//! # Shoal Core
//!
//! A recursive-descent parser for the shoal configuration format.
//!
//! Shoal is a whitespace-insensitive, line-oriented text format: documents
//! hold `name = value` parameters and nested `#name:` sections, sections can
//! repeat as ordered lists (`###` separators), and closing markers (`-`,
//! `--name`, `---`) end any number of open sections without indentation.
//!
//! ## Quick Start
//!
//! ```rust
//! let input = "\
//! host = localhost
//! #redis:
//!   port = 6379
//!   flags = [verbose, cluster]
//! ";
//!
//! let tree = shoal_core::parse(input).unwrap();
//! let root = tree.root().as_item().unwrap();
//!
//! assert_eq!(root.param("host").unwrap().value(), Some("localhost"));
//! assert_eq!(root.nodes_count(), 1);
//! ```
//!
//! ## Errors
//!
//! Parsing either completes or fails on the first malformed token; every
//! error carries the 1-based line/column where the offending token starts:
//!
//! ```rust
//! let err = shoal_core::parse("port =").unwrap_err();
//! assert_eq!(err.to_string(), "[line:1, column:7] Parameter 'port' value is missing");
//! ```
//!
//! ## Values are strings
//!
//! The parser performs no type conversion: every scalar and list element is
//! the literal text from the document (quotes stripped). Interpreting
//! values is left to the consumer.

pub mod error;
pub mod lexer;
pub mod params;
pub mod parser;
pub mod position;
pub mod stream;
pub mod tree;

pub use error::{ConfigError, ErrorKind};
pub use parser::parse;
pub use position::StreamPosition;
pub use tree::{ItemNode, ListNode, NodeData, ParamValue, Tree, TreeNode, TreeParam};
