//! Python bindings for the shoal configuration parser.

use pyo3::prelude::*;
use pyo3::types::{PyDict, PyList};
use shoal_core::error::{ConfigError as CoreConfigError, ErrorKind as CoreErrorKind};
use shoal_core::position::StreamPosition as CorePosition;
use shoal_core::tree::{ItemNode, ListNode, NodeData, ParamValue, TreeNode, TreeParam};

// ============================================================================
// Position
// ============================================================================

/// Source location in the input text (1-based line/column).
#[pyclass(frozen, get_all, name = "Position")]
#[derive(Clone, Copy)]
pub struct PyPosition {
    pub line: u32,
    pub column: u32,
}

#[pymethods]
impl PyPosition {
    fn __repr__(&self) -> String {
        format!("Position({}, {})", self.line, self.column)
    }

    fn __str__(&self) -> String {
        format!("line:{}, column:{}", self.line, self.column)
    }
}

impl From<CorePosition> for PyPosition {
    fn from(p: CorePosition) -> Self {
        PyPosition {
            line: p.line,
            column: p.column,
        }
    }
}

// ============================================================================
// Errors
// ============================================================================

/// Parse error category.
#[pyclass(frozen, eq, eq_int, name = "ErrorKind")]
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum PyErrorKind {
    EmptyName,
    BlankName,
    MultilineName,
    TrailingContentAfterColon,
    DuplicateName,
    MissingAssignment,
    ValueNotOnSameLine,
    MissingValue,
    MissingListElement,
    OneParamPerLine,
    UnterminatedString,
    BadListSeparatorLine,
    InvalidClosingToken,
    CannotCloseRoot,
    UnknownCloseTarget,
}

impl From<CoreErrorKind> for PyErrorKind {
    fn from(k: CoreErrorKind) -> Self {
        match k {
            CoreErrorKind::EmptyName => PyErrorKind::EmptyName,
            CoreErrorKind::BlankName => PyErrorKind::BlankName,
            CoreErrorKind::MultilineName => PyErrorKind::MultilineName,
            CoreErrorKind::TrailingContentAfterColon => PyErrorKind::TrailingContentAfterColon,
            CoreErrorKind::DuplicateName => PyErrorKind::DuplicateName,
            CoreErrorKind::MissingAssignment => PyErrorKind::MissingAssignment,
            CoreErrorKind::ValueNotOnSameLine => PyErrorKind::ValueNotOnSameLine,
            CoreErrorKind::MissingValue => PyErrorKind::MissingValue,
            CoreErrorKind::MissingListElement => PyErrorKind::MissingListElement,
            CoreErrorKind::OneParamPerLine => PyErrorKind::OneParamPerLine,
            CoreErrorKind::UnterminatedString => PyErrorKind::UnterminatedString,
            CoreErrorKind::BadListSeparatorLine => PyErrorKind::BadListSeparatorLine,
            CoreErrorKind::InvalidClosingToken => PyErrorKind::InvalidClosingToken,
            CoreErrorKind::CannotCloseRoot => PyErrorKind::CannotCloseRoot,
            CoreErrorKind::UnknownCloseTarget => PyErrorKind::UnknownCloseTarget,
        }
    }
}

/// A parse error.
#[pyclass(frozen, get_all, name = "ConfigError")]
#[derive(Clone)]
pub struct PyConfigError {
    pub message: String,
    pub position: PyPosition,
    pub kind: PyErrorKind,
}

#[pymethods]
impl PyConfigError {
    fn __repr__(&self) -> String {
        format!("ConfigError({:?}, {:?})", self.message, self.kind)
    }

    fn __str__(&self) -> String {
        format!(
            "[line:{}, column:{}] {}",
            self.position.line, self.position.column, self.message
        )
    }
}

impl From<CoreConfigError> for PyConfigError {
    fn from(e: CoreConfigError) -> Self {
        PyConfigError {
            message: e.message,
            position: e.position.into(),
            kind: e.kind.into(),
        }
    }
}

// ============================================================================
// Tree types
// ============================================================================

/// A configuration parameter: a scalar string or a list of strings.
#[pyclass(frozen, get_all, name = "Param")]
pub struct PyParam {
    pub value: Option<String>,
    pub values: Option<Vec<String>>,
    pub position: PyPosition,
}

#[pymethods]
impl PyParam {
    #[getter]
    fn is_list(&self) -> bool {
        self.values.is_some()
    }

    fn __repr__(&self) -> String {
        match (&self.value, &self.values) {
            (Some(value), _) => format!("Param({:?})", value),
            (_, Some(values)) => format!("Param({:?})", values),
            _ => "Param()".to_string(),
        }
    }
}

/// A section with named parameters and named child sections.
#[pyclass(frozen, get_all, name = "ItemNode")]
pub struct PyItemNode {
    /// dict[str, Param] in declaration order.
    pub params: PyObject,
    /// dict[str, ItemNode | ListNode] in declaration order.
    pub nodes: PyObject,
    pub position: PyPosition,
}

#[pymethods]
impl PyItemNode {
    fn __repr__(&self, py: Python<'_>) -> String {
        let params: &Bound<'_, PyDict> = self.params.downcast_bound(py).unwrap();
        let nodes: &Bound<'_, PyDict> = self.nodes.downcast_bound(py).unwrap();
        format!("ItemNode(params={}, nodes={})", params.len(), nodes.len())
    }
}

/// An ordered sequence of anonymous element sections.
#[pyclass(frozen, get_all, name = "ListNode")]
pub struct PyListNode {
    /// list[ItemNode] in document order.
    pub elements: PyObject,
    pub position: PyPosition,
}

#[pymethods]
impl PyListNode {
    fn __repr__(&self, py: Python<'_>) -> String {
        let elements: &Bound<'_, PyList> = self.elements.downcast_bound(py).unwrap();
        format!("ListNode(elements={})", elements.len())
    }
}

// ============================================================================
// Conversion
// ============================================================================

fn convert_param(param: &TreeParam) -> PyParam {
    match &param.value {
        ParamValue::Scalar(value) => PyParam {
            value: Some(value.clone()),
            values: None,
            position: param.position.into(),
        },
        ParamValue::List(values) => PyParam {
            value: None,
            values: Some(values.clone()),
            position: param.position.into(),
        },
    }
}

fn convert_node(py: Python<'_>, node: &TreeNode) -> PyObject {
    match &node.data {
        NodeData::Item(item) => Py::new(py, convert_item(py, node, item)).unwrap().into_any(),
        NodeData::List(list) => Py::new(py, convert_list(py, node, list)).unwrap().into_any(),
    }
}

fn convert_item(py: Python<'_>, node: &TreeNode, item: &ItemNode) -> PyItemNode {
    let params = PyDict::new(py);
    for (name, param) in item.params() {
        params
            .set_item(name, Py::new(py, convert_param(param)).unwrap())
            .unwrap();
    }

    let nodes = PyDict::new(py);
    for (name, child) in item.nodes() {
        nodes.set_item(name, convert_node(py, child)).unwrap();
    }

    PyItemNode {
        params: params.into(),
        nodes: nodes.into(),
        position: node.position.into(),
    }
}

fn convert_list(py: Python<'_>, node: &TreeNode, list: &ListNode) -> PyListNode {
    let elements = PyList::empty(py);
    for element in list.nodes() {
        elements.append(convert_node(py, element)).unwrap();
    }

    PyListNode {
        elements: elements.into(),
        position: node.position.into(),
    }
}

// ============================================================================
// Module functions
// ============================================================================

/// Parse a shoal configuration string.
///
/// Args:
///     input: Configuration text to parse
///
/// Returns:
///     ItemNode: The document root
///
/// Raises:
///     ValueError: On parse error, with the formatted message
#[pyfunction]
#[pyo3(text_signature = "(input)")]
fn parse(py: Python<'_>, input: &str) -> PyResult<PyItemNode> {
    match shoal_core::parse(input) {
        Ok(tree) => {
            let root = tree.root();
            let item = root
                .as_item()
                .expect("the document root is always an item");
            Ok(convert_item(py, root, item))
        }
        Err(e) => Err(pyo3::exceptions::PyValueError::new_err(e.to_string())),
    }
}

/// Check a shoal configuration string without building a tree.
///
/// Args:
///     input: Configuration text to check
///
/// Returns:
///     ConfigError | None: The first error, or None when the input is valid
#[pyfunction]
#[pyo3(text_signature = "(input)")]
fn validate(input: &str) -> Option<PyConfigError> {
    shoal_core::parse(input).err().map(PyConfigError::from)
}

// ============================================================================
// Module
// ============================================================================

/// Shoal - whitespace-insensitive configuration format parser.
#[pymodule]
fn pyshoal(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyPosition>()?;
    m.add_class::<PyErrorKind>()?;
    m.add_class::<PyConfigError>()?;
    m.add_class::<PyParam>()?;
    m.add_class::<PyItemNode>()?;
    m.add_class::<PyListNode>()?;
    m.add_function(wrap_pyfunction!(parse, m)?)?;
    m.add_function(wrap_pyfunction!(validate, m)?)?;
    Ok(())
}
