//! Nested-value descent and mutation over [`serde_json::Value`].
//!
//! These helpers implement the document model shared by every backend:
//! a document is a mapping whose fields may themselves be mappings, and
//! a path selects one leaf by successive key lookups. Descent never uses
//! errors as control flow -- a segment that fails to resolve yields
//! `None` and the driver maps that to its not-found condition.

use serde_json::{Map, Value};

/// Walk `root` by successive mapping lookups.
///
/// Returns `None` the moment a segment does not resolve into a mapping
/// holding the next segment. Only mappings are descended; indexing a
/// sequence or scalar by a segment is a failed resolution, not an error.
pub fn descend<'a>(root: &'a Value, segments: &[String]) -> Option<&'a Value> {
    let mut current = root;
    for segment in segments {
        current = current.as_object()?.get(segment)?;
    }
    Some(current)
}

/// Write `value` at the path given by `segments`, creating intermediate
/// mappings along the way.
///
/// An intermediate that exists but is not a mapping is replaced by one,
/// mirroring the permissive upsert of the in-memory backends. Empty
/// `segments` is a no-op; [`FieldPath`](crate::FieldPath) guarantees
/// non-emptiness for driver calls.
pub fn set_at(root: &mut Value, segments: &[String], value: Value) {
    let Some((leaf, parents)) = segments.split_last() else {
        return;
    };
    let mut current = root;
    for segment in parents {
        if !current.is_object() {
            *current = Value::Object(Map::new());
        }
        current = current
            .as_object_mut()
            .expect("intermediate is a mapping")
            .entry(segment.as_str())
            .or_insert(Value::Null);
    }
    if !current.is_object() {
        *current = Value::Object(Map::new());
    }
    current
        .as_object_mut()
        .expect("leaf parent is a mapping")
        .insert(leaf.clone(), value);
}

/// Remove the leaf at the path given by `segments`.
///
/// Returns `true` if a field was removed. An absent leaf, an
/// unresolvable intermediate, or empty `segments` is a no-op returning
/// `false` -- removal is idempotent.
pub fn remove_at(root: &mut Value, segments: &[String]) -> bool {
    let Some((leaf, parents)) = segments.split_last() else {
        return false;
    };
    let mut current = root;
    for segment in parents {
        let Some(next) = current
            .as_object_mut()
            .and_then(|map| map.get_mut(segment.as_str()))
        else {
            return false;
        };
        current = next;
    }
    current
        .as_object_mut()
        .is_some_and(|map| map.remove(leaf.as_str()).is_some())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn segs(parts: &[&str]) -> Vec<String> {
        parts.iter().map(|s| s.to_string()).collect()
    }

    // -----------------------------------------------------------------------
    // Descent
    // -----------------------------------------------------------------------

    #[test]
    fn descend_reaches_a_nested_leaf() {
        let doc = json!({"users": {"42": {"balance": 100}}});
        let leaf = descend(&doc, &segs(&["users", "42", "balance"]));
        assert_eq!(leaf, Some(&json!(100)));
    }

    #[test]
    fn descend_returns_intermediate_substructure() {
        let doc = json!({"users": {"42": {"balance": 100}}});
        let sub = descend(&doc, &segs(&["users", "42"]));
        assert_eq!(sub, Some(&json!({"balance": 100})));
    }

    #[test]
    fn descend_missing_key_is_none() {
        let doc = json!({"users": {}});
        assert!(descend(&doc, &segs(&["users", "42"])).is_none());
    }

    #[test]
    fn descend_through_scalar_is_none() {
        let doc = json!({"users": 7});
        assert!(descend(&doc, &segs(&["users", "42"])).is_none());
    }

    #[test]
    fn descend_through_sequence_is_none() {
        let doc = json!({"users": [1, 2, 3]});
        assert!(descend(&doc, &segs(&["users", "0"])).is_none());
    }

    #[test]
    fn descend_finds_stored_null() {
        let doc = json!({"flag": null});
        assert_eq!(descend(&doc, &segs(&["flag"])), Some(&Value::Null));
    }

    // -----------------------------------------------------------------------
    // Insertion
    // -----------------------------------------------------------------------

    #[test]
    fn set_at_creates_intermediates() {
        let mut doc = json!({});
        set_at(&mut doc, &segs(&["a", "b", "c"]), json!(1));
        assert_eq!(doc, json!({"a": {"b": {"c": 1}}}));
    }

    #[test]
    fn set_at_preserves_siblings() {
        let mut doc = json!({"a": {"x": 1}});
        set_at(&mut doc, &segs(&["a", "y"]), json!(2));
        assert_eq!(doc, json!({"a": {"x": 1, "y": 2}}));
    }

    #[test]
    fn set_at_overwrites_existing_leaf() {
        let mut doc = json!({"a": {"x": 1}});
        set_at(&mut doc, &segs(&["a", "x"]), json!("new"));
        assert_eq!(doc, json!({"a": {"x": "new"}}));
    }

    #[test]
    fn set_at_replaces_scalar_intermediate() {
        let mut doc = json!({"a": 1});
        set_at(&mut doc, &segs(&["a", "b"]), json!(2));
        assert_eq!(doc, json!({"a": {"b": 2}}));
    }

    #[test]
    fn set_at_empty_segments_is_noop() {
        let mut doc = json!({"a": 1});
        set_at(&mut doc, &[], json!(2));
        assert_eq!(doc, json!({"a": 1}));
    }

    // -----------------------------------------------------------------------
    // Removal
    // -----------------------------------------------------------------------

    #[test]
    fn remove_at_deletes_the_leaf_only() {
        let mut doc = json!({"a": {"x": 1, "y": 2}});
        assert!(remove_at(&mut doc, &segs(&["a", "x"])));
        assert_eq!(doc, json!({"a": {"y": 2}}));
    }

    #[test]
    fn remove_at_absent_leaf_is_false() {
        let mut doc = json!({"a": {}});
        assert!(!remove_at(&mut doc, &segs(&["a", "x"])));
    }

    #[test]
    fn remove_at_unresolvable_intermediate_is_false() {
        let mut doc = json!({"a": 1});
        assert!(!remove_at(&mut doc, &segs(&["a", "x"])));
        assert_eq!(doc, json!({"a": 1}));
    }

    #[test]
    fn remove_at_is_idempotent() {
        let mut doc = json!({"a": {"x": 1}});
        assert!(remove_at(&mut doc, &segs(&["a", "x"])));
        assert!(!remove_at(&mut doc, &segs(&["a", "x"])));
        assert_eq!(doc, json!({"a": {}}));
    }
}
