//! Integration tests for list sections (`###` separators)

use shoal_core::tree::{ItemNode, ListNode, TreeNode};
use shoal_core::{parse, ConfigError, Tree};

fn parse_ok(input: &str) -> Tree {
    parse(input).unwrap()
}

fn parse_err(input: &str) -> ConfigError {
    parse(input).unwrap_err()
}

fn item(node: &TreeNode) -> &ItemNode {
    node.as_item().unwrap()
}

fn list<'a>(parent: &'a ItemNode, name: &str) -> &'a ListNode {
    parent.node(name).unwrap().as_list().unwrap()
}

fn element(list: &ListNode, index: usize) -> &ItemNode {
    item(list.node(index).unwrap())
}

fn param<'a>(node: &'a ItemNode, name: &str) -> &'a str {
    node.param(name).unwrap().value().unwrap()
}

// ============================================================================
// List Sections
// ============================================================================

#[test]
fn test_list_ended_by_end_of_input() {
    let tree = parse_ok(
        "testStr = Hello\n\
         #testNodes:\n\
         ###\n\
         \x20   testInt = 3\n\
         ###\n\
         \x20   testInt = 2\n",
    );

    let root = item(tree.root());
    assert_eq!(param(root, "testStr"), "Hello");
    assert_eq!(root.nodes_count(), 1);
    let test_nodes = list(root, "testNodes");
    assert_eq!(test_nodes.count(), 2);
    assert_eq!(param(element(test_nodes, 0), "testInt"), "3");
    assert_eq!(param(element(test_nodes, 1), "testInt"), "2");
}

#[test]
fn test_list_closed_with_marker() {
    let tree = parse_ok(
        "#testNodes:\n\
         ###\n\
         \x20   testInt = 3\n\
         ###\n\
         \x20   testInt = 2\n\
         -\n\
         testStr = Hello\n",
    );

    let root = item(tree.root());
    assert_eq!(param(root, "testStr"), "Hello");
    let test_nodes = list(root, "testNodes");
    assert_eq!(test_nodes.count(), 2);
    assert_eq!(param(element(test_nodes, 0), "testInt"), "3");
    assert_eq!(param(element(test_nodes, 1), "testInt"), "2");
}

#[test]
fn test_list_closed_by_name() {
    let tree = parse_ok(
        "#testNodes:\n\
         ###\n\
         \x20   testInt = 3\n\
         ###\n\
         \x20   testInt = 2\n\
         --testNodes\n\
         testStr = Hello\n",
    );

    let root = item(tree.root());
    assert_eq!(param(root, "testStr"), "Hello");
    let test_nodes = list(root, "testNodes");
    assert_eq!(test_nodes.count(), 2);
    assert_eq!(param(element(test_nodes, 0), "testInt"), "3");
    assert_eq!(param(element(test_nodes, 1), "testInt"), "2");
}

#[test]
fn test_trailing_separator_without_element() {
    let tree = parse_ok("#x:\n###\n  y = 1\n###");

    let x = list(item(tree.root()), "x");
    assert_eq!(x.count(), 1);
    assert_eq!(param(element(x, 0), "y"), "1");
}

#[test]
fn test_nested_list_closed_to_root() {
    let tree = parse_ok(
        "#testCfg:\n\
         \x20   testStr = Hello\n\
         \x20   #testNodes:\n\
         \x20   ###\n\
         \x20       testInt = 3\n\
         \x20   ###\n\
         \x20       testInt = 2\n\
         ---\n\
         testDouble = 0.5\n",
    );

    let root = item(tree.root());
    assert_eq!(param(root, "testDouble"), "0.5");
    let test_cfg = item(root.node("testCfg").unwrap());
    assert_eq!(param(test_cfg, "testStr"), "Hello");
    let test_nodes = list(test_cfg, "testNodes");
    assert_eq!(test_nodes.count(), 2);
    assert_eq!(param(element(test_nodes, 0), "testInt"), "3");
    assert_eq!(param(element(test_nodes, 1), "testInt"), "2");
}

#[test]
fn test_nested_list_closed_by_outer_name() {
    let tree = parse_ok(
        "#testCfg:\n\
         \x20   testStr = Hello\n\
         \x20   #testNodes:\n\
         \x20   ###\n\
         \x20       testInt = 3\n\
         \x20   ###\n\
         \x20       testInt = 2\n\
         --testCfg\n\
         testDouble = 0.5\n",
    );

    let root = item(tree.root());
    assert_eq!(param(root, "testDouble"), "0.5");
    let test_cfg = item(root.node("testCfg").unwrap());
    let test_nodes = list(test_cfg, "testNodes");
    assert_eq!(test_nodes.count(), 2);
}

#[test]
fn test_lists_nested_in_list_elements() {
    let tree = parse_ok(
        "#testList:\n\
         ###\n\
         \x20   testStr = Hello\n\
         \x20   #testNodes:\n\
         \x20   ###\n\
         \x20       testInt = 3\n\
         \x20   ###\n\
         \x20       testInt = 33\n\
         \x20   -\n\
         ###\n\
         \x20   #testNodes:\n\
         \x20   ###\n\
         \x20       testInt = 5\n\
         \x20   -\n\
         \x20   testStr = World\n\
         -\n\
         testStr = Hello\n",
    );

    let root = item(tree.root());
    assert_eq!(param(root, "testStr"), "Hello");
    let test_list = list(root, "testList");
    assert_eq!(test_list.count(), 2);

    let first = element(test_list, 0);
    assert_eq!(param(first, "testStr"), "Hello");
    let first_nodes = list(first, "testNodes");
    assert_eq!(first_nodes.count(), 2);
    assert_eq!(param(element(first_nodes, 0), "testInt"), "3");
    assert_eq!(param(element(first_nodes, 1), "testInt"), "33");

    let second = element(test_list, 1);
    assert_eq!(param(second, "testStr"), "World");
    let second_nodes = list(second, "testNodes");
    assert_eq!(second_nodes.count(), 1);
    assert_eq!(param(element(second_nodes, 0), "testInt"), "5");
}

#[test]
fn test_items_nested_in_list_elements() {
    let tree = parse_ok(
        "#testList:\n\
         ###\n\
         \x20   testDouble = 3.0\n\
         \x20   #testNode:\n\
         \x20       testInt = 3\n\
         ###\n\
         \x20   testDouble = 5.0\n\
         \x20   #testNode:\n\
         \x20       testInt = 5\n\
         --testList\n\
         testStr = Hello\n",
    );

    let root = item(tree.root());
    assert_eq!(param(root, "testStr"), "Hello");
    let test_list = list(root, "testList");
    assert_eq!(test_list.count(), 2);

    let first = element(test_list, 0);
    assert_eq!(param(first, "testDouble"), "3.0");
    assert_eq!(param(item(first.node("testNode").unwrap()), "testInt"), "3");

    let second = element(test_list, 1);
    assert_eq!(param(second, "testDouble"), "5.0");
    assert_eq!(param(item(second.node("testNode").unwrap()), "testInt"), "5");
}

#[test]
fn test_element_close_also_closes_the_list() {
    let tree = parse_ok(
        "#x:\n\
         ###\n\
         \x20 y = 1\n\
         -\n\
         z = 2\n",
    );

    let root = item(tree.root());
    assert_eq!(param(root, "z"), "2");
    let x = list(root, "x");
    assert_eq!(x.count(), 1);
    assert_eq!(param(element(x, 0), "y"), "1");
}

#[test]
fn test_empty_list_closed_right_after_separator() {
    let tree = parse_ok(
        "#x:\n\
         ###\n\
         -\n\
         z = 2\n",
    );

    let root = item(tree.root());
    assert_eq!(param(root, "z"), "2");
    assert_eq!(list(root, "x").count(), 0);
}

// ============================================================================
// Errors
// ============================================================================

#[test]
fn test_content_on_separator_line_error() {
    let error = parse_err(
        "#testNodes:\n\
         ### error\n\
         \x20   testInt = 3\n",
    );
    assert_eq!(
        error.to_string(),
        "[line:2, column:5] Wrong config node list 'testNodes' format: there can't be anything besides comments and whitespaces on the same line with list separator '###'"
    );
}

#[test]
fn test_two_dash_separator_reads_as_node_name_error() {
    let error = parse_err(
        "#testNodes:\n\
         ##error\n\
         \x20   testInt = 3\n",
    );
    assert_eq!(
        error.to_string(),
        "[line:2, column:8] Config node can't have a multiline name"
    );
}

#[test]
fn test_content_before_first_separator_error() {
    let error = parse_err(
        "#testNodes:\n\
         error\n\
         ###\n\
         \x20   testInt = 3\n",
    );
    assert_eq!(
        error.to_string(),
        "[line:2, column:6] Wrong param 'error' format: parameter's value must be placed on the same line as its name"
    );
}
