//! Importing a store subtree must reproduce its contents exactly, for
//! hand-built trees covering every kind and for randomized nested trees.
//! The randomized runs additionally check copy independence and
//! release-completeness.

use std::collections::BTreeMap;

use base64::{engine::general_purpose::STANDARD as B64, Engine};
use plist_pool::{Handle, Kind, Pool};
use plist_tree::{DictNode, Node};
use proptest::collection::{btree_map, vec as pvec};
use proptest::prelude::*;
use serde_json::{json, Value};

#[test]
fn every_kind_survives_import() {
    let mut pool = Pool::new();
    let root = pool.alloc_dict();
    let title = pool.alloc_string("prefs");
    pool.dict_set(root, "title", title);
    let enabled = pool.alloc_bool(true);
    pool.dict_set(root, "enabled", enabled);
    let count = pool.alloc_int(5);
    pool.dict_set(root, "count", count);
    let ratio = pool.alloc_real(0.25);
    pool.dict_set(root, "ratio", ratio);
    let stamp = pool.alloc_date(1234.5);
    pool.dict_set(root, "stamp", stamp);
    let blob = pool.alloc_data(vec![1, 2, 3]);
    pool.dict_set(root, "blob", blob);
    let marker = pool.alloc_uid(7);
    pool.dict_set(root, "marker", marker);

    let items = pool.alloc_array();
    let first = pool.alloc_string("a");
    pool.arr_push(items, first);
    let second = pool.alloc_int(1);
    pool.arr_push(items, second);
    pool.dict_set(root, "items", items);

    let nested = pool.alloc_dict();
    let deep = pool.alloc_bool(false);
    pool.dict_set(nested, "deep", deep);
    pool.dict_set(root, "nested", nested);

    let d = DictNode::import(&pool, root).expect("root is a dict");
    assert_eq!(
        d.view(&pool),
        json!({
            "title": "prefs",
            "enabled": true,
            "count": 5,
            "ratio": 0.25,
            "stamp": 1234.5,
            "blob": "AQID",
            "marker": null,
            "items": ["a", 1],
            "nested": { "deep": false },
        })
    );

    // kinds are preserved, not just values
    assert!(matches!(d.get("stamp"), Some(Node::Date(_))));
    assert!(matches!(d.get("blob"), Some(Node::Bin(_))));
    match d.get("marker") {
        Some(Node::Opaque(o)) => assert_eq!(o.kind(), Kind::Uid),
        other => panic!("expected an opaque node, got {other:?}"),
    }

    // iteration order matches the store's entry order
    let keys: Vec<&str> = d.keys().collect();
    let store_keys: Vec<&str> = pool.dict_entries(root).map(|(k, _)| k).collect();
    assert_eq!(keys, store_keys);
}

#[test]
fn nested_containers_import_as_containers() {
    let mut pool = Pool::new();
    let root = pool.alloc_dict();
    let inner = pool.alloc_array();
    let leaf = pool.alloc_dict();
    let v = pool.alloc_int(9);
    pool.dict_set(leaf, "v", v);
    pool.arr_push(inner, leaf);
    pool.dict_set(root, "inner", inner);

    let d = DictNode::import(&pool, root).expect("root is a dict");
    let arr = d.get("inner").and_then(Node::as_arr).expect("inner array");
    let leaf = arr.get(0).and_then(Node::as_dict).expect("leaf dict");
    assert_eq!(leaf.view(&pool), json!({ "v": 9 }));
}

// ── Randomized trees ──────────────────────────────────────────────────────

#[derive(Debug, Clone)]
enum Fixture {
    Bool(bool),
    Int(i64),
    Str(String),
    Data(Vec<u8>),
    Arr(Vec<Fixture>),
    Dict(BTreeMap<String, Fixture>),
}

fn fixture_strategy() -> impl Strategy<Value = Fixture> {
    let leaf = prop_oneof![
        any::<bool>().prop_map(Fixture::Bool),
        any::<i64>().prop_map(Fixture::Int),
        "[a-z]{0,8}".prop_map(Fixture::Str),
        pvec(any::<u8>(), 0..8).prop_map(Fixture::Data),
    ];
    leaf.prop_recursive(3, 24, 4, |inner| {
        prop_oneof![
            pvec(inner.clone(), 0..4).prop_map(Fixture::Arr),
            btree_map("[a-z]{1,6}", inner, 0..4).prop_map(Fixture::Dict),
        ]
    })
}

fn build(pool: &mut Pool, fixture: &Fixture) -> Handle {
    match fixture {
        Fixture::Bool(v) => pool.alloc_bool(*v),
        Fixture::Int(v) => pool.alloc_int(*v),
        Fixture::Str(v) => pool.alloc_string(v.clone()),
        Fixture::Data(v) => pool.alloc_data(v.clone()),
        Fixture::Arr(items) => {
            let arr = pool.alloc_array();
            for item in items {
                let child = build(pool, item);
                pool.arr_push(arr, child);
            }
            arr
        }
        Fixture::Dict(entries) => {
            let dict = pool.alloc_dict();
            for (key, value) in entries {
                let child = build(pool, value);
                pool.dict_set(dict, key, child);
            }
            dict
        }
    }
}

fn expected(fixture: &Fixture) -> Value {
    match fixture {
        Fixture::Bool(v) => Value::Bool(*v),
        Fixture::Int(v) => Value::from(*v),
        Fixture::Str(v) => Value::String(v.clone()),
        Fixture::Data(v) => Value::String(B64.encode(v)),
        Fixture::Arr(items) => Value::Array(items.iter().map(expected).collect()),
        Fixture::Dict(entries) => {
            let mut map = serde_json::Map::new();
            for (key, value) in entries {
                map.insert(key.clone(), expected(value));
            }
            Value::Object(map)
        }
    }
}

proptest! {
    #[test]
    fn import_reproduces_and_releases(fixture in fixture_strategy()) {
        let mut pool = Pool::new();
        let root = build(&mut pool, &fixture);
        let node = Node::import(&pool, root);
        prop_assert_eq!(node.view(&pool), expected(&fixture));

        let copy_handle = pool.copy_deep(root);
        let copy = Node::import(&pool, copy_handle);
        node.free(&mut pool);
        // the copy survives its source's release
        prop_assert_eq!(copy.view(&pool), expected(&fixture));
        copy.free(&mut pool);
        prop_assert_eq!(pool.live_nodes(), 0);
    }
}
