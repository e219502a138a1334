//! Schema-free search over a Terraform state document
//!
//! `terraform show -json` output nests resources differently depending on
//! Terraform version, modules and workspaces, so resources are located by
//! walking the whole document rather than by a fixed path.

use serde_json::{Map, Value};

/// Collect every JSON object in `root` for which `predicate` holds.
///
/// Depth-first over the whole document: arrays are recursed into
/// element-wise; objects are tested against the predicate (matches are
/// collected) and then recursed into value-wise; scalars and null
/// contribute nothing. Matches are returned in traversal order.
pub fn find_objects<'a, P>(root: &'a Value, predicate: P) -> Vec<&'a Map<String, Value>>
where
    P: Fn(&Map<String, Value>) -> bool,
{
    let mut matches = Vec::new();
    walk(root, &predicate, &mut matches);
    matches
}

fn walk<'a, P>(node: &'a Value, predicate: &P, matches: &mut Vec<&'a Map<String, Value>>)
where
    P: Fn(&Map<String, Value>) -> bool,
{
    match node {
        Value::Array(items) => {
            for item in items {
                walk(item, predicate, matches);
            }
        }
        Value::Object(map) => {
            if predicate(map) {
                matches.push(map);
            }
            for value in map.values() {
                walk(value, predicate, matches);
            }
        }
        _ => {}
    }
}
