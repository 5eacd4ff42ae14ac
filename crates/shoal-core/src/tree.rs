//! Destination tree for parsed configuration data.
//!
//! The node parser hands sections and parameters to this model as soon as
//! they are read; nothing is buffered in the parser itself. Insertion order
//! is preserved everywhere, and all values are strings — interpreting them
//! is the consumer's concern.

use crate::position::StreamPosition;

/// A parameter value: a single string or an ordered list of strings.
///
/// The distinction is grammatical, not structural: bracket syntax always
/// produces a list, even with zero or one element, while a comma-free
/// unbracketed value is always a scalar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParamValue {
    /// Single string value.
    Scalar(String),
    /// Ordered list of string values (possibly empty).
    List(Vec<String>),
}

/// A named parameter attached to an item node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeParam {
    /// The parsed value.
    pub value: ParamValue,
    /// Position where the parameter's name starts.
    pub position: StreamPosition,
}

impl TreeParam {
    /// Check if this parameter holds a single value.
    #[inline]
    pub fn is_scalar(&self) -> bool {
        matches!(self.value, ParamValue::Scalar(_))
    }

    /// Check if this parameter holds a list.
    #[inline]
    pub fn is_list(&self) -> bool {
        matches!(self.value, ParamValue::List(_))
    }

    /// The scalar value, if this parameter is one.
    pub fn value(&self) -> Option<&str> {
        match &self.value {
            ParamValue::Scalar(value) => Some(value),
            ParamValue::List(_) => None,
        }
    }

    /// The list elements, if this parameter is a list.
    pub fn value_list(&self) -> Option<&[String]> {
        match &self.value {
            ParamValue::Scalar(_) => None,
            ParamValue::List(values) => Some(values),
        }
    }
}

/// The two node shapes of a configuration tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeData {
    /// A section holding named parameters and named child sections.
    Item(ItemNode),
    /// An ordered sequence of anonymous element sections.
    List(ListNode),
}

/// A configuration tree node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeNode {
    /// Item or list contents.
    pub data: NodeData,
    /// Position where the node was declared.
    pub position: StreamPosition,
    /// Set only on the document root.
    root: bool,
}

impl TreeNode {
    pub(crate) fn item(position: StreamPosition) -> Self {
        Self {
            data: NodeData::Item(ItemNode::default()),
            position,
            root: false,
        }
    }

    pub(crate) fn list(position: StreamPosition) -> Self {
        Self {
            data: NodeData::List(ListNode::default()),
            position,
            root: false,
        }
    }

    pub(crate) fn new_root() -> Self {
        Self {
            data: NodeData::Item(ItemNode::default()),
            position: StreamPosition::start(),
            root: true,
        }
    }

    /// Check if this node is the document root.
    #[inline]
    pub fn is_root(&self) -> bool {
        self.root
    }

    /// Check if this node is an item section.
    #[inline]
    pub fn is_item(&self) -> bool {
        matches!(self.data, NodeData::Item(_))
    }

    /// Check if this node is a list section.
    #[inline]
    pub fn is_list(&self) -> bool {
        matches!(self.data, NodeData::List(_))
    }

    /// Access this node's item contents, if it is an item.
    pub fn as_item(&self) -> Option<&ItemNode> {
        match &self.data {
            NodeData::Item(item) => Some(item),
            NodeData::List(_) => None,
        }
    }

    /// Mutable access to this node's item contents, if it is an item.
    pub fn as_item_mut(&mut self) -> Option<&mut ItemNode> {
        match &mut self.data {
            NodeData::Item(item) => Some(item),
            NodeData::List(_) => None,
        }
    }

    /// Access this node's list contents, if it is a list.
    pub fn as_list(&self) -> Option<&ListNode> {
        match &self.data {
            NodeData::Item(_) => None,
            NodeData::List(list) => Some(list),
        }
    }

    /// Mutable access to this node's list contents, if it is a list.
    pub fn as_list_mut(&mut self) -> Option<&mut ListNode> {
        match &mut self.data {
            NodeData::Item(_) => None,
            NodeData::List(list) => Some(list),
        }
    }
}

/// A section with named parameters and named child sections.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ItemNode {
    params: Vec<(String, TreeParam)>,
    nodes: Vec<(String, TreeNode)>,
}

impl ItemNode {
    /// Number of parameters in declaration order.
    #[inline]
    pub fn params_count(&self) -> usize {
        self.params.len()
    }

    /// Check if a parameter with the given name exists.
    pub fn has_param(&self, name: &str) -> bool {
        self.params.iter().any(|(param_name, _)| param_name == name)
    }

    /// Look up a parameter by name.
    pub fn param(&self, name: &str) -> Option<&TreeParam> {
        self.params
            .iter()
            .find(|(param_name, _)| param_name == name)
            .map(|(_, param)| param)
    }

    /// Iterate over parameters in declaration order.
    pub fn params(&self) -> impl Iterator<Item = (&str, &TreeParam)> {
        self.params
            .iter()
            .map(|(name, param)| (name.as_str(), param))
    }

    /// Attach a scalar parameter.
    pub fn add_param(
        &mut self,
        name: impl Into<String>,
        value: impl Into<String>,
        position: StreamPosition,
    ) {
        self.params.push((
            name.into(),
            TreeParam {
                value: ParamValue::Scalar(value.into()),
                position,
            },
        ));
    }

    /// Attach a list parameter.
    pub fn add_param_list(
        &mut self,
        name: impl Into<String>,
        values: Vec<String>,
        position: StreamPosition,
    ) {
        self.params.push((
            name.into(),
            TreeParam {
                value: ParamValue::List(values),
                position,
            },
        ));
    }

    /// Number of child nodes in declaration order.
    #[inline]
    pub fn nodes_count(&self) -> usize {
        self.nodes.len()
    }

    /// Check if a child node with the given name exists.
    pub fn has_node(&self, name: &str) -> bool {
        self.nodes.iter().any(|(node_name, _)| node_name == name)
    }

    /// Look up a child node by name.
    pub fn node(&self, name: &str) -> Option<&TreeNode> {
        self.nodes
            .iter()
            .find(|(node_name, _)| node_name == name)
            .map(|(_, node)| node)
    }

    /// Iterate over child nodes in declaration order.
    pub fn nodes(&self) -> impl Iterator<Item = (&str, &TreeNode)> {
        self.nodes.iter().map(|(name, node)| (name.as_str(), node))
    }

    /// Attach a new item section and return a handle to it.
    pub fn add_node(&mut self, name: impl Into<String>, position: StreamPosition) -> &mut TreeNode {
        let index = self.nodes.len();
        self.nodes.push((name.into(), TreeNode::item(position)));
        &mut self.nodes[index].1
    }

    /// Attach a new list section and return a handle to it.
    pub fn add_node_list(
        &mut self,
        name: impl Into<String>,
        position: StreamPosition,
    ) -> &mut TreeNode {
        let index = self.nodes.len();
        self.nodes.push((name.into(), TreeNode::list(position)));
        &mut self.nodes[index].1
    }
}

/// An ordered sequence of anonymous element sections sharing one name.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ListNode {
    nodes: Vec<TreeNode>,
}

impl ListNode {
    /// Number of elements.
    #[inline]
    pub fn count(&self) -> usize {
        self.nodes.len()
    }

    /// Check if the list has no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Access an element by index.
    pub fn node(&self, index: usize) -> Option<&TreeNode> {
        self.nodes.get(index)
    }

    /// Iterate over elements in document order.
    pub fn nodes(&self) -> impl Iterator<Item = &TreeNode> {
        self.nodes.iter()
    }

    /// Append a new element section and return a handle to it.
    pub fn append_element(&mut self, position: StreamPosition) -> &mut TreeNode {
        let index = self.nodes.len();
        self.nodes.push(TreeNode::item(position));
        &mut self.nodes[index]
    }
}

/// A parsed configuration document.
///
/// The root is always an item node; its parameters and sections are the
/// document's top-level entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tree {
    root: TreeNode,
}

impl Tree {
    pub(crate) fn new() -> Self {
        Self {
            root: TreeNode::new_root(),
        }
    }

    pub(crate) fn root_mut(&mut self) -> &mut TreeNode {
        &mut self.root
    }

    /// The document root node.
    #[inline]
    pub fn root(&self) -> &TreeNode {
        &self.root
    }
}
