//! Object tree over an arena-backed property-list store.
//!
//! One logical document, two physical representations: the ground-truth
//! node tree lives in a [`plist_pool::Pool`], and this crate maintains a
//! wrapper tree that mirrors it node-for-node.  Containers only expose
//! mutation through methods that update both representations in the same
//! call, so the two can never drift apart between calls.
//!
//! Ownership is move-only: inserting a node into a container transfers it,
//! removing destroys it, and [`DictNode::take`]/[`ArrNode::take`] are the
//! only way to get a child back out alive.  Wrappers do not release their
//! store nodes on drop (the pool is not reachable from `Drop`), so a tree
//! is torn down explicitly with `free`.
//!
//! ```
//! use plist_pool::Pool;
//! use plist_tree::{DictNode, IntNode, StrNode};
//!
//! let mut pool = Pool::new();
//! let mut d = DictNode::new(&mut pool);
//! let name = StrNode::new(&mut pool, "Alice");
//! let age = IntNode::new(&mut pool, 30);
//! d.insert(&mut pool, "name", name);
//! d.insert(&mut pool, "age", age);
//! assert_eq!(d.view(&pool), serde_json::json!({ "name": "Alice", "age": 30 }));
//!
//! d.free(&mut pool);
//! assert_eq!(pool.live_nodes(), 0);
//! ```

pub mod arr;
pub mod dict;
pub mod error;
pub mod node;
pub mod scalar;
pub mod structure;

pub use arr::ArrNode;
pub use dict::DictNode;
pub use error::TreeError;
pub use node::Node;
pub use scalar::{BinNode, BoolNode, DateNode, IntNode, OpaqueNode, RealNode, StrNode};
pub use structure::Structure;
