//! Key-addressed container node.
//!
//! A [`DictNode`] is one logical dictionary held in two physical
//! representations: the backing store subtree (ground truth, addressed by
//! the container's handle) and a shadow map of owned child wrappers.  The
//! two are mutated only together, inside a single method call; between
//! calls, every shadow key has a store entry under the same key whose
//! handle equals the shadow entry's handle.
//!
//! Ownership is transfer, not sharing: `insert` takes the child by value,
//! `remove` destroys the child, and `take` is the only way to get a child
//! back out alive.  Copies (`deep_copy`, `assign_from`) clone the whole
//! store subtree and share no handles with their source.

use indexmap::IndexMap;
use plist_pool::{Handle, Kind, Pool};
use serde_json::{Map, Value};

use crate::error::TreeError;
use crate::node::Node;
use crate::structure::{import_dict_children, Structure};

pub struct DictNode {
    handle: Handle,
    children: IndexMap<String, Node>,
}

impl DictNode {
    /// Allocate an empty dictionary.
    pub fn new(pool: &mut Pool) -> Self {
        Self { handle: pool.alloc_dict(), children: IndexMap::new() }
    }

    /// Adopt an existing dict handle and wrap its children.
    ///
    /// Nothing is copied: `handle` and its whole subtree are owned by the
    /// returned container from here on.
    pub fn import(pool: &Pool, handle: Handle) -> Result<Self, TreeError> {
        match pool.kind(handle) {
            Kind::Dict => Ok(Self::adopt(pool, handle)),
            found => Err(TreeError::KindMismatch { expected: Kind::Dict, found }),
        }
    }

    pub(crate) fn adopt(pool: &Pool, handle: Handle) -> Self {
        Self { handle, children: import_dict_children(pool, handle) }
    }

    /// Clone the whole subtree into fresh store nodes and wrap the clone.
    /// The copy shares no handles with `self`.
    pub fn deep_copy(&self, pool: &mut Pool) -> Self {
        let clone = pool.copy_deep(self.handle);
        Self::adopt(pool, clone)
    }

    /// Replace this dictionary's contents with a deep copy of `other`.
    ///
    /// The old subtree, including the container node itself, is released
    /// before the clone is adopted.
    pub fn assign_from(&mut self, pool: &mut Pool, other: &DictNode) {
        pool.release(self.handle);
        self.handle = pool.copy_deep(other.handle);
        self.children = import_dict_children(pool, self.handle);
    }

    /// Move `node` into the dictionary under `key`.
    ///
    /// Whatever previously occupied `key` is destroyed, in the store and
    /// in the shadow map.  The new node's handle is attached before the
    /// old entry is released, so the store never observes the key empty.
    pub fn insert(&mut self, pool: &mut Pool, key: impl Into<String>, node: impl Into<Node>) {
        let key = key.into();
        let node = node.into();
        let evicted = pool.dict_set(self.handle, &key, node.handle());
        if let Some(old) = evicted {
            pool.release(old);
        }
        self.children.insert(key, node);
    }

    /// Borrow the child at `key`.
    pub fn get(&self, key: &str) -> Option<&Node> {
        self.children.get(key)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut Node> {
        self.children.get_mut(key)
    }

    /// Destroy the child at `key`: detach it from the store, release its
    /// subtree, drop its wrapper.  Absent keys are a no-op.
    pub fn remove(&mut self, pool: &mut Pool, key: &str) {
        if let Some(child) = pool.dict_remove(self.handle, key) {
            pool.release(child);
        }
        self.children.shift_remove(key);
    }

    /// Destroy the child whose handle is `node`, resolving its key through
    /// the store's reverse lookup.
    ///
    /// `node` must be a live handle attached directly under this
    /// dictionary.  Anything else (a standalone node, a child of some
    /// other container) is [`TreeError::NotAChild`] and leaves both
    /// representations untouched.
    pub fn remove_node(&mut self, pool: &mut Pool, node: Handle) -> Result<(), TreeError> {
        if !pool.contains(node) || pool.parent(node) != Some(self.handle) {
            return Err(TreeError::NotAChild);
        }
        let key = pool.key_of(node).ok_or(TreeError::NotAChild)?.to_string();
        self.remove(pool, &key);
        Ok(())
    }

    /// Detach the child at `key` and hand it back alive.  The returned
    /// node is unattached and may be inserted elsewhere or freed.
    pub fn take(&mut self, pool: &mut Pool, key: &str) -> Option<Node> {
        let node = self.children.shift_remove(key)?;
        let detached = pool.dict_remove(self.handle, key);
        debug_assert_eq!(detached, Some(node.handle()));
        Some(node)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.children.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Entries in store order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Node)> + '_ {
        self.children.iter().map(|(k, n)| (k.as_str(), n))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.children.keys().map(|k| k.as_str())
    }

    /// JSON projection, keys in store order.
    pub fn view(&self, pool: &Pool) -> Value {
        let mut map = Map::new();
        for (key, node) in &self.children {
            map.insert(key.clone(), node.view(pool));
        }
        Value::Object(map)
    }

    pub fn handle(&self) -> Handle {
        self.handle
    }

    /// Release the container and everything under it.
    pub fn free(self, pool: &mut Pool) {
        pool.release(self.handle);
    }
}

impl std::fmt::Debug for DictNode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DictNode")
            .field("handle", &self.handle)
            .field("keys", &self.children.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl Structure for DictNode {
    fn handle(&self) -> Handle {
        self.handle
    }

    fn size(&self) -> usize {
        self.children.len()
    }
}
