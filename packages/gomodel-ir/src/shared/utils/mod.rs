//! Utility modules

pub mod tree_sitter;

pub use self::tree_sitter::{
    children_by_field, find_child_by_kind, first_error_node, has_child_kind, named_children,
    node_text, node_to_span,
};
