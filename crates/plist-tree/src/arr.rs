//! Index-addressed container node.
//!
//! Same dual-representation discipline as [`DictNode`](crate::DictNode),
//! position-addressed: the shadow `Vec` and the store's item list move in
//! lockstep through every mutation.

use plist_pool::{Handle, Kind, Pool};
use serde_json::Value;

use crate::error::TreeError;
use crate::node::Node;
use crate::structure::{import_arr_children, Structure};

pub struct ArrNode {
    handle: Handle,
    children: Vec<Node>,
}

impl ArrNode {
    /// Allocate an empty array.
    pub fn new(pool: &mut Pool) -> Self {
        Self { handle: pool.alloc_array(), children: Vec::new() }
    }

    /// Adopt an existing array handle and wrap its items.
    pub fn import(pool: &Pool, handle: Handle) -> Result<Self, TreeError> {
        match pool.kind(handle) {
            Kind::Array => Ok(Self::adopt(pool, handle)),
            found => Err(TreeError::KindMismatch { expected: Kind::Array, found }),
        }
    }

    pub(crate) fn adopt(pool: &Pool, handle: Handle) -> Self {
        Self { handle, children: import_arr_children(pool, handle) }
    }

    pub fn deep_copy(&self, pool: &mut Pool) -> Self {
        let clone = pool.copy_deep(self.handle);
        Self::adopt(pool, clone)
    }

    /// Replace this array's contents with a deep copy of `other`,
    /// releasing the old subtree first.
    pub fn assign_from(&mut self, pool: &mut Pool, other: &ArrNode) {
        pool.release(self.handle);
        self.handle = pool.copy_deep(other.handle);
        self.children = import_arr_children(pool, self.handle);
    }

    /// Move `node` to the end of the array.
    pub fn push(&mut self, pool: &mut Pool, node: impl Into<Node>) {
        let node = node.into();
        pool.arr_push(self.handle, node.handle());
        self.children.push(node);
    }

    /// Move `node` into position `index`; out-of-range appends.
    pub fn insert(&mut self, pool: &mut Pool, index: usize, node: impl Into<Node>) {
        let node = node.into();
        let index = index.min(self.children.len());
        pool.arr_insert(self.handle, index, node.handle());
        self.children.insert(index, node);
    }

    pub fn get(&self, index: usize) -> Option<&Node> {
        self.children.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Node> {
        self.children.get_mut(index)
    }

    /// Destroy the item at `index`; out-of-range is a no-op.
    pub fn remove(&mut self, pool: &mut Pool, index: usize) {
        if index >= self.children.len() {
            return;
        }
        if let Some(child) = pool.arr_remove(self.handle, index) {
            pool.release(child);
        }
        self.children.remove(index);
    }

    /// Destroy the item whose handle is `node`, resolving its position
    /// through the store's reverse lookup.  A node not attached directly
    /// under this array is [`TreeError::NotAChild`].
    pub fn remove_node(&mut self, pool: &mut Pool, node: Handle) -> Result<(), TreeError> {
        if !pool.contains(node) || pool.parent(node) != Some(self.handle) {
            return Err(TreeError::NotAChild);
        }
        let index = pool.index_of(node).ok_or(TreeError::NotAChild)?;
        self.remove(pool, index);
        Ok(())
    }

    /// Detach the item at `index` and hand it back alive.
    pub fn take(&mut self, pool: &mut Pool, index: usize) -> Option<Node> {
        if index >= self.children.len() {
            return None;
        }
        let detached = pool.arr_remove(self.handle, index);
        let node = self.children.remove(index);
        debug_assert_eq!(detached, Some(node.handle()));
        Some(node)
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Items in store order.
    pub fn iter(&self) -> impl Iterator<Item = &Node> + '_ {
        self.children.iter()
    }

    pub fn view(&self, pool: &Pool) -> Value {
        Value::Array(self.children.iter().map(|n| n.view(pool)).collect())
    }

    pub fn handle(&self) -> Handle {
        self.handle
    }

    pub fn free(self, pool: &mut Pool) {
        pool.release(self.handle);
    }
}

impl std::fmt::Debug for ArrNode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ArrNode")
            .field("handle", &self.handle)
            .field("len", &self.children.len())
            .finish()
    }
}

impl Structure for ArrNode {
    fn handle(&self) -> Handle {
        self.handle
    }

    fn size(&self) -> usize {
        self.children.len()
    }
}
