//! Recursive search over schema-less financial statement trees.
//!
//! Accounting APIs return statements as arbitrarily nested structures: lists
//! of line items that may carry child lists under keys like `children` or
//! `rows`, or plain objects whose keys are section names. `extract_total`
//! walks whatever shape arrives and returns the first numeric total whose
//! label contains one of the given lowercase keyword fragments, or 0.0 when
//! nothing matches.
//!
//! Matching is deliberately asymmetric and must stay that way: list nodes
//! short-circuit on the first matching sibling, while a matched object
//! section whose value is a list is summed across all of its elements.
//! A genuine zero-valued line item is indistinguishable from an absent one;
//! callers treat 0.0 as "not found" and apply their own fallbacks.

use crate::numeric::coerce_num;
use serde_json::Value;

const LABEL_KEYS: [&str; 5] = ["name", "label", "title", "account_name", "accountName"];
const VALUE_KEYS: [&str; 4] = ["total", "amount", "value", "balance"];
const CHILD_KEYS: [&str; 4] = ["children", "rows", "items", "line_items"];

/// Searches `tree` for a line item or section whose label contains any of
/// the lowercase `keywords` and returns its numeric total, or 0.0.
pub fn extract_total(tree: &Value, keywords: &[&str]) -> f64 {
    match tree {
        Value::Array(nodes) => search_list(nodes, keywords),
        Value::Object(_) => search_section_map(tree, keywords),
        _ => 0.0,
    }
}

fn label_matches(label: &str, keywords: &[&str]) -> bool {
    let label = label.to_lowercase();
    keywords.iter().any(|keyword| label.contains(keyword))
}

fn node_label(node: &Value) -> Option<&str> {
    let map = node.as_object()?;
    LABEL_KEYS.iter().find_map(|key| map.get(*key)?.as_str())
}

fn node_value(node: &Value) -> f64 {
    let Some(map) = node.as_object() else {
        return 0.0;
    };
    VALUE_KEYS
        .iter()
        .find_map(|key| map.get(*key))
        .map(coerce_num)
        .unwrap_or(0.0)
}

/// First match wins: a matching sibling's value is returned immediately and
/// later siblings are never consulted. Non-matching siblings are searched
/// depth-first through their child collections before moving on.
fn search_list(nodes: &[Value], keywords: &[&str]) -> f64 {
    for node in nodes {
        if let Some(label) = node_label(node) {
            if label_matches(label, keywords) {
                return node_value(node);
            }
        }

        let Some(map) = node.as_object() else {
            continue;
        };
        for child_key in CHILD_KEYS {
            if let Some(children) = map.get(child_key) {
                let found = extract_total(children, keywords);
                if found != 0.0 {
                    return found;
                }
            }
        }
    }
    0.0
}

/// Section maps match on the key itself. A matched list value is summed
/// across every element, unlike the first-match rule for list nodes.
fn search_section_map(tree: &Value, keywords: &[&str]) -> f64 {
    let Some(map) = tree.as_object() else {
        return 0.0;
    };

    for (key, value) in map {
        if !label_matches(key, keywords) {
            continue;
        }
        match value {
            Value::Number(n) => return n.as_f64().unwrap_or(0.0),
            Value::Object(section) => {
                if let Some(amount) = section.get("amount") {
                    return coerce_num(amount);
                }
            }
            Value::Array(entries) => {
                return entries
                    .iter()
                    .map(|entry| {
                        entry
                            .as_object()
                            .and_then(|map| {
                                ["amount", "total", "value"]
                                    .iter()
                                    .find_map(|key| map.get(*key))
                            })
                            .map(coerce_num)
                            .unwrap_or(0.0)
                    })
                    .sum();
            }
            _ => {}
        }
    }

    for value in map.values() {
        if value.is_object() {
            let found = search_section_map(value, keywords);
            if found != 0.0 {
                return found;
            }
        }
    }

    0.0
}
