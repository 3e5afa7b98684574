//! Shared container contract.
//!
//! Both container shapes ([`DictNode`](crate::DictNode) and
//! [`ArrNode`](crate::ArrNode)) are a node that owns a collection of child
//! wrappers, each wrapping a handle that is a child of the container's own
//! handle in the store.  The import walk below is the single dispatch
//! point that rebuilds such a shadow collection from a store subtree.

use indexmap::IndexMap;
use plist_pool::{Handle, Pool};

use crate::node::Node;

/// Introspection shared by the container shapes.
pub trait Structure {
    /// Backing store handle of the container itself.
    fn handle(&self) -> Handle;
    /// Number of direct children.
    fn size(&self) -> usize;
    fn is_empty(&self) -> bool {
        self.size() == 0
    }
}

/// Wrap every entry of a dict handle, in store order.
///
/// Container children recurse through [`Node::import`]; the resulting map
/// iterates in the same order as the store's own entry list.
pub(crate) fn import_dict_children(pool: &Pool, dict: Handle) -> IndexMap<String, Node> {
    let mut children = IndexMap::new();
    for (key, child) in pool.dict_entries(dict) {
        children.insert(key.to_string(), Node::import(pool, child));
    }
    children
}

/// Wrap every item of an array handle, in store order.
pub(crate) fn import_arr_children(pool: &Pool, arr: Handle) -> Vec<Node> {
    pool.arr_items(arr)
        .map(|child| Node::import(pool, child))
        .collect()
}
