//! The node sum type and import dispatch.
//!
//! # Node types
//!
//! | Rust type      | Store kind | Semantics                          |
//! |----------------|------------|------------------------------------|
//! | `DictNode`     | `Dict`     | Key-addressed container            |
//! | `ArrNode`      | `Array`    | Index-addressed container          |
//! | `BoolNode`     | `Boolean`  | Boolean leaf                       |
//! | `IntNode`      | `Integer`  | Signed 64-bit integer leaf         |
//! | `RealNode`     | `Real`     | Floating-point leaf                |
//! | `StrNode`      | `String`   | UTF-8 string leaf                  |
//! | `DateNode`     | `Date`     | Seconds since the plist epoch      |
//! | `BinNode`      | `Data`     | Binary blob leaf                   |
//! | `OpaqueNode`   | any other  | Handle-only wrapper, no accessors  |
//!
//! [`Node::import`] picks the variant from the store's kind tag for the
//! handle.  Containers recurse, wrapping their whole subtree; kinds with
//! no dedicated wrapper become [`OpaqueNode`] rather than failing, so
//! trees produced by a newer store stay importable.

use base64::{engine::general_purpose::STANDARD as B64, Engine};
use plist_pool::{Handle, Kind, Pool};
use serde_json::Value;

use crate::arr::ArrNode;
use crate::dict::DictNode;
use crate::scalar::{BinNode, BoolNode, DateNode, IntNode, OpaqueNode, RealNode, StrNode};

/// A node of the object tree: one wrapper per store node, owning it.
#[derive(Debug)]
pub enum Node {
    Dict(DictNode),
    Arr(ArrNode),
    Bool(BoolNode),
    Int(IntNode),
    Real(RealNode),
    Str(StrNode),
    Date(DateNode),
    Bin(BinNode),
    Opaque(OpaqueNode),
}

impl Node {
    /// Wrap the subtree rooted at `handle`, dispatching on its kind tag.
    ///
    /// The returned wrapper owns `handle`; whoever holds the wrapper is
    /// responsible for either moving it into a container or freeing it.
    pub fn import(pool: &Pool, handle: Handle) -> Node {
        match pool.kind(handle) {
            Kind::Dict => Node::Dict(DictNode::adopt(pool, handle)),
            Kind::Array => Node::Arr(ArrNode::adopt(pool, handle)),
            Kind::Boolean => Node::Bool(BoolNode::adopt(handle)),
            Kind::Integer => Node::Int(IntNode::adopt(handle)),
            Kind::Real => Node::Real(RealNode::adopt(handle)),
            Kind::String => Node::Str(StrNode::adopt(handle)),
            Kind::Date => Node::Date(DateNode::adopt(handle)),
            Kind::Data => Node::Bin(BinNode::adopt(handle)),
            other => Node::Opaque(OpaqueNode::adopt(handle, other)),
        }
    }

    /// Backing store handle.
    pub fn handle(&self) -> Handle {
        match self {
            Node::Dict(n) => n.handle(),
            Node::Arr(n) => n.handle(),
            Node::Bool(n) => n.handle(),
            Node::Int(n) => n.handle(),
            Node::Real(n) => n.handle(),
            Node::Str(n) => n.handle(),
            Node::Date(n) => n.handle(),
            Node::Bin(n) => n.handle(),
            Node::Opaque(n) => n.handle(),
        }
    }

    /// Store kind this wrapper was built for.  Fixed at import.
    pub fn kind(&self) -> Kind {
        match self {
            Node::Dict(_) => Kind::Dict,
            Node::Arr(_) => Kind::Array,
            Node::Bool(_) => Kind::Boolean,
            Node::Int(_) => Kind::Integer,
            Node::Real(_) => Kind::Real,
            Node::Str(_) => Kind::String,
            Node::Date(_) => Kind::Date,
            Node::Bin(_) => Kind::Data,
            Node::Opaque(n) => n.kind(),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Node::Dict(_) => "dict",
            Node::Arr(_) => "arr",
            Node::Bool(_) => "bool",
            Node::Int(_) => "int",
            Node::Real(_) => "real",
            Node::Str(_) => "str",
            Node::Date(_) => "date",
            Node::Bin(_) => "bin",
            Node::Opaque(_) => "opaque",
        }
    }

    /// JSON projection of the subtree.
    ///
    /// Binary blobs render as base64 strings, dates as raw seconds, and
    /// opaque nodes as `null` (they have no JSON shape).
    pub fn view(&self, pool: &Pool) -> Value {
        match self {
            Node::Dict(n) => n.view(pool),
            Node::Arr(n) => n.view(pool),
            Node::Bool(n) => Value::Bool(n.value(pool)),
            Node::Int(n) => Value::from(n.value(pool)),
            Node::Real(n) => Value::from(n.value(pool)),
            Node::Str(n) => Value::String(n.value(pool).to_string()),
            Node::Date(n) => Value::from(n.value(pool)),
            Node::Bin(n) => Value::String(B64.encode(n.value(pool))),
            Node::Opaque(_) => Value::Null,
        }
    }

    /// Release the backing subtree.  Container variants drop their shadow
    /// children with the wrapper; every handle below becomes stale.
    pub fn free(self, pool: &mut Pool) {
        match self {
            Node::Dict(n) => n.free(pool),
            Node::Arr(n) => n.free(pool),
            Node::Bool(n) => n.free(pool),
            Node::Int(n) => n.free(pool),
            Node::Real(n) => n.free(pool),
            Node::Str(n) => n.free(pool),
            Node::Date(n) => n.free(pool),
            Node::Bin(n) => n.free(pool),
            Node::Opaque(n) => n.free(pool),
        }
    }

    pub fn as_dict(&self) -> Option<&DictNode> {
        match self {
            Node::Dict(n) => Some(n),
            _ => None,
        }
    }

    pub fn as_dict_mut(&mut self) -> Option<&mut DictNode> {
        match self {
            Node::Dict(n) => Some(n),
            _ => None,
        }
    }

    pub fn as_arr(&self) -> Option<&ArrNode> {
        match self {
            Node::Arr(n) => Some(n),
            _ => None,
        }
    }

    pub fn as_arr_mut(&mut self) -> Option<&mut ArrNode> {
        match self {
            Node::Arr(n) => Some(n),
            _ => None,
        }
    }
}

impl From<DictNode> for Node {
    fn from(n: DictNode) -> Node {
        Node::Dict(n)
    }
}

impl From<ArrNode> for Node {
    fn from(n: ArrNode) -> Node {
        Node::Arr(n)
    }
}

impl From<BoolNode> for Node {
    fn from(n: BoolNode) -> Node {
        Node::Bool(n)
    }
}

impl From<IntNode> for Node {
    fn from(n: IntNode) -> Node {
        Node::Int(n)
    }
}

impl From<RealNode> for Node {
    fn from(n: RealNode) -> Node {
        Node::Real(n)
    }
}

impl From<StrNode> for Node {
    fn from(n: StrNode) -> Node {
        Node::Str(n)
    }
}

impl From<DateNode> for Node {
    fn from(n: DateNode) -> Node {
        Node::Date(n)
    }
}

impl From<BinNode> for Node {
    fn from(n: BinNode) -> Node {
        Node::Bin(n)
    }
}

impl From<OpaqueNode> for Node {
    fn from(n: OpaqueNode) -> Node {
        Node::Opaque(n)
    }
}
