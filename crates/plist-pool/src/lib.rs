//! Arena-backed property-list node store.
//!
//! Ground-truth storage for a plist document tree.  Every node lives in a
//! slot of a [`Pool`] and is addressed by a generational [`Handle`]; all
//! structure (dict children, array items, parent links) is kept inside the
//! pool, so handles stay `Copy` and trivially comparable.
//!
//! Instead of raw pointers, all node references are handles into the
//! caller-owned [`Pool`], and every operation takes the pool explicitly.
//! A released slot bumps its generation, so a stale handle can never alias
//! a node allocated later into the same slot.
//!
//! # Capability surface
//!
//! | Group         | Operations                                                    |
//! |---------------|---------------------------------------------------------------|
//! | allocation    | `alloc_dict`, `alloc_array`, `alloc_bool`, … one per [`Kind`] |
//! | lifecycle     | [`Pool::copy_deep`], [`Pool::release`]                        |
//! | dict          | `dict_get` / `dict_set` / `dict_remove` / `dict_entries` / `key_of` |
//! | array         | `arr_get` / `arr_push` / `arr_insert` / `arr_remove` / `arr_items` / `index_of` |
//! | scalars       | `bool_value` / `set_bool_value`, … one pair per leaf kind     |
//! | introspection | [`Pool::kind`], [`Pool::contains`], [`Pool::parent`], [`Pool::live_nodes`] |
//!
//! Lookups that can legitimately miss (absent dict key, out-of-range index,
//! reverse lookup of a detached node) return `Option`.  Handing the pool a
//! stale handle, attaching a node that already has a parent, or calling a
//! typed accessor on the wrong kind is an ownership-contract violation and
//! panics.

mod pool;
mod types;

pub use pool::Pool;
pub use types::{Handle, Kind};
