//! The recursive dispatcher.
//!
//! Both directions walk [`Convertible::field_table`] in order and dispatch
//! on the [`FieldKind`](crate::FieldKind) of each field:
//!
//! | kind | marshal | unmarshal |
//! |------|---------|-----------|
//! | Convertible | recurse into a nested object | instantiate if empty, then recurse |
//! | Array | copy the elements in index order | replace with a positional copy |
//! | Passthrough | copy the leaf | decode and assign the leaf |
//!
//! An absent value marshals to `null`; a `null` node leaves the field as it
//! was. Failures are recorded per field and never stop the traversal.

// -----------------------------------------------------------------------------
// Modules

mod marshal;
mod traversal;
mod unmarshal;

// -----------------------------------------------------------------------------
// Exports

pub use traversal::Traversal;

pub(crate) use marshal::marshal_fields;
pub(crate) use unmarshal::unmarshal_fields;

use crate::convertible::Convertible;
use crate::error::Report;
use crate::tree::ObjectNode;

// -----------------------------------------------------------------------------
// Public API

/// Converts `instance` into a new object node.
///
/// Field failures are logged with [`log::warn!`] and the affected keys hold
/// `null`. Use [`marshal_with_report`] to inspect them.
///
/// # Examples
///
/// ```
/// use tm_mapper::{derive::Convertible, serde_json::json};
///
/// #[derive(Convertible, Default)]
/// struct Point {
///     x: i32,
///     y: i32,
///     label: Option<String>,
/// }
///
/// let node = tm_mapper::marshal(&Point { x: 1, y: 2, label: None });
///
/// assert_eq!(node["x"], 1);
/// assert_eq!(node["label"], json!(null));
/// assert_eq!(node.keys().collect::<Vec<_>>(), ["x", "y", "label"]);
/// ```
pub fn marshal<T: Convertible>(instance: &T) -> ObjectNode {
    let (object, report) = marshal_with_report(instance);
    warn_swallowed("marshal", T::TYPE_NAME, &report);
    object
}

/// Converts `instance` into a new object node and reports every field
/// failure.
pub fn marshal_with_report<T: Convertible>(instance: &T) -> (ObjectNode, Report) {
    let mut traversal = Traversal::new();
    let object = marshal_fields(instance, &mut traversal);
    (object, traversal.into_report())
}

/// Populates `instance` from `object`.
///
/// Returns `true` regardless of the outcome; failures are logged with
/// [`log::warn!`]. Use [`unmarshal_with_report`] to inspect them.
///
/// # Examples
///
/// ```
/// use tm_mapper::{derive::Convertible, serde_json::json};
///
/// #[derive(Convertible, Default)]
/// struct Point {
///     x: i32,
///     y: i32,
/// }
///
/// let node = json!({ "x": 5, "y": "six" });
/// let mut point = Point::default();
///
/// assert!(tm_mapper::unmarshal(&mut point, node.as_object().unwrap()));
/// assert_eq!((point.x, point.y), (5, 0));
/// ```
pub fn unmarshal<T: Convertible>(instance: &mut T, object: &ObjectNode) -> bool {
    let report = unmarshal_with_report(instance, object);
    warn_swallowed("unmarshal", T::TYPE_NAME, &report);
    report.legacy_status()
}

/// Populates `instance` from `object` and reports every field failure.
pub fn unmarshal_with_report<T: Convertible>(instance: &mut T, object: &ObjectNode) -> Report {
    let mut traversal = Traversal::new();
    unmarshal_fields(instance, object, &mut traversal);
    traversal.into_report()
}

fn warn_swallowed(direction: &str, type_name: &str, report: &Report) {
    for error in report {
        log::warn!("{direction} `{type_name}`: {error}");
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use alloc::string::{String, ToString};
    use alloc::vec;
    use alloc::vec::Vec;

    use serde_json::{Value, json};

    use crate::derive::Convertible;
    use crate::error::{AccessError, FieldErrorKind, InstantiationError, ShapeError};
    use crate::info::FieldDescriptor;
    use crate::tree::{NodeKind, ObjectNode};
    use crate::value::FieldValue;
    use crate::{Convertible, marshal, marshal_with_report, unmarshal, unmarshal_with_report};

    #[derive(Convertible, Default, Debug, Clone, PartialEq)]
    struct Inner {
        flag: bool,
        values: Vec<i32>,
    }

    #[derive(Convertible, Default, Debug, Clone, PartialEq)]
    struct Outer {
        id: u64,
        name: String,
        inner: Option<Inner>,
        tags: Option<Vec<String>>,
        scores: [u8; 3],
    }

    fn sample() -> Outer {
        Outer {
            id: 7,
            name: "seven".to_string(),
            inner: Some(Inner {
                flag: true,
                values: vec![1, 2, 3],
            }),
            tags: Some(vec!["a".to_string(), "b".to_string()]),
            scores: [9, 8, 7],
        }
    }

    fn object(node: Value) -> ObjectNode {
        match node {
            Value::Object(object) => object,
            _ => panic!("not an object"),
        }
    }

    #[test]
    fn marshal_shape() {
        let node = marshal(&sample());

        assert_eq!(
            Value::Object(node.clone()),
            json!({
                "id": 7,
                "name": "seven",
                "inner": { "flag": true, "values": [1, 2, 3] },
                "tags": ["a", "b"],
                "scores": [9, 8, 7],
            })
        );

        let keys = node.keys().map(String::as_str).collect::<Vec<_>>();
        assert_eq!(keys, ["id", "name", "inner", "tags", "scores"]);
    }

    #[test]
    fn round_trip() {
        let value = sample();
        let node = marshal(&value);

        let mut restored = Outer::default();
        let report = unmarshal_with_report(&mut restored, &node);

        assert!(report.is_complete());
        assert_eq!(restored, value);
    }

    #[test]
    fn absent_values_marshal_to_null() {
        let node = marshal(&Outer::default());

        assert_eq!(node["inner"], Value::Null);
        assert_eq!(node["tags"], Value::Null);
        assert_eq!(node["scores"], json!([0, 0, 0]));
    }

    #[test]
    fn null_leaves_fields_untouched() {
        let mut value = sample();
        let node = object(json!({
            "id": null,
            "name": null,
            "inner": null,
            "tags": null,
            "scores": null,
        }));

        let report = unmarshal_with_report(&mut value, &node);

        assert!(report.is_complete());
        assert_eq!(value, sample());
    }

    #[test]
    fn array_leaves_are_copied() {
        let mut inner = Inner {
            flag: false,
            values: vec![42; 5],
        };
        let node = object(json!({ "flag": true, "values": [1, 2, 3] }));

        assert!(unmarshal_with_report(&mut inner, &node).is_complete());
        assert_eq!(inner.values, [1, 2, 3]);

        let node = object(json!({ "flag": true, "values": [] }));
        assert!(unmarshal_with_report(&mut inner, &node).is_complete());
        assert!(inner.values.is_empty());
    }

    #[test]
    fn nested_value_is_constructed_lazily() {
        let mut value = Outer::default();
        let node = object(json!({
            "id": 1,
            "name": "one",
            "inner": { "flag": true, "values": [4] },
            "tags": ["x"],
            "scores": [1, 2, 3],
        }));

        assert!(unmarshal_with_report(&mut value, &node).is_complete());
        assert_eq!(
            value.inner,
            Some(Inner {
                flag: true,
                values: vec![4],
            })
        );
        assert_eq!(value.tags, Some(vec!["x".to_string()]));
    }

    #[test]
    fn existing_nested_value_is_reused() {
        let mut value = sample();
        let node = object(json!({ "inner": { "flag": false } }));

        let report = unmarshal_with_report(&mut value, &node);

        let inner = value.inner.as_ref().unwrap();
        assert!(!inner.flag);
        // `values` was missing from the nested node.
        assert_eq!(inner.values, [1, 2, 3]);

        let paths = report.iter().map(|e| e.path()).collect::<Vec<_>>();
        assert_eq!(paths, ["id", "name", "inner.values", "tags", "scores"]);
    }

    #[test]
    fn unmarshal_is_idempotent() {
        let node = marshal(&sample());
        let mut value = Outer::default();

        unmarshal_with_report(&mut value, &node);
        let once = value.clone();
        unmarshal_with_report(&mut value, &node);

        assert_eq!(value, once);
    }

    #[test]
    fn marshal_reproduces_the_unmarshaled_node() {
        let node = object(json!({
            "id": 11,
            "name": "eleven",
            "inner": { "flag": false, "values": [-1, 0, 1] },
            "tags": null,
            "scores": [1, 1, 2],
        }));

        let mut value = Outer::default();
        assert!(unmarshal_with_report(&mut value, &node).is_complete());

        assert_eq!(marshal(&value), node);
    }

    #[test]
    fn failures_are_isolated() {
        let mut value = Outer::default();
        let node = object(json!({
            "id": "seven",
            "name": "kept",
            "inner": { "flag": 1, "values": [1, "x"] },
            "tags": "not an array",
            "scores": [1, 2],
        }));

        let report = unmarshal_with_report(&mut value, &node);

        assert_eq!(value.id, 0);
        assert_eq!(value.name, "kept");
        assert_eq!(value.inner, Some(Inner::default()));
        assert_eq!(value.tags, None);
        assert_eq!(value.scores, [0, 0, 0]);

        let shape = |err: ShapeError| FieldErrorKind::Shape(err);
        let errors = report
            .iter()
            .map(|e| (e.path(), e.kind().clone()))
            .collect::<Vec<_>>();
        assert_eq!(
            errors,
            [
                ("id", shape(ShapeError::mismatch("u64", &json!("")))),
                ("inner.flag", shape(ShapeError::mismatch("bool", &json!(0)))),
                (
                    "inner.values",
                    shape(ShapeError::Element {
                        index: 1,
                        expected: "i32",
                        found: NodeKind::String,
                    }),
                ),
                ("tags", shape(ShapeError::mismatch("array", &json!("")))),
                ("scores", shape(ShapeError::length(3, 2))),
            ]
        );
    }

    #[test]
    fn object_shape_is_required_for_nested() {
        let mut value = Outer::default();
        let node = object(json!({ "inner": [1] }));

        let report = unmarshal_with_report(&mut value, &node);

        assert_eq!(value.inner, None);
        let inner = report.iter().find(|e| e.path() == "inner").unwrap();
        assert_eq!(
            inner.kind(),
            &FieldErrorKind::Shape(ShapeError::Mismatch {
                expected: "object",
                found: NodeKind::Array,
            })
        );
    }

    #[test]
    fn missing_keys_are_reported() {
        let mut value = sample();
        let report = unmarshal_with_report(&mut value, &ObjectNode::new());

        assert_eq!(value, sample());
        assert_eq!(report.failure_count(), 5);
        assert!(
            report
                .iter()
                .all(|e| *e.kind() == FieldErrorKind::MissingKey)
        );
    }

    #[test]
    fn unmarshal_never_touches_the_node() {
        let node = object(json!({ "id": 3, "extra": "kept", "name": null }));
        let before = node.clone();

        let mut value = Outer::default();
        unmarshal_with_report(&mut value, &node);

        assert_eq!(node, before);
        assert_eq!(value.id, 3);
    }

    #[test]
    fn legacy_status_is_always_true() {
        let mut value = Outer::default();
        let node = object(json!({ "id": "bad" }));

        assert!(unmarshal(&mut value, &node));
        assert!(value.unmarshal_self(&node));
        assert_eq!(value.marshal_self(), marshal(&value));
    }

    // -------------------------------------------------------------------------
    // Reserved names

    #[allow(non_snake_case, reason = "mirrors a foreign object model")]
    #[derive(Convertible, Default)]
    struct Stamped {
        id: u32,
        serialVersionUID: i64,
    }

    #[test]
    fn reserved_fields_are_excluded() {
        let stamped = Stamped {
            id: 1,
            serialVersionUID: 42,
        };
        assert_eq!(Stamped::FIELDS.len(), 1);
        assert_eq!(Value::Object(marshal(&stamped)), json!({ "id": 1 }));

        let mut restored = Stamped::default();
        let node = object(json!({ "id": 2, "serialVersionUID": 9 }));
        assert!(unmarshal_with_report(&mut restored, &node).is_complete());
        assert_eq!((restored.id, restored.serialVersionUID), (2, 0));
    }

    // -------------------------------------------------------------------------
    // Hand-written tables

    struct Vault {
        locked: bool,
        label: String,
        secret: i32,
    }

    impl Convertible for Vault {
        const TYPE_NAME: &'static str = "Vault";
        const FIELDS: &'static [FieldDescriptor<Self>] = &[
            FieldDescriptor::<Self>::new::<String>(
                "label",
                "String",
                |this| Ok(FieldValue::field_ref(&this.label)),
                |this| Ok(FieldValue::field_mut(&mut this.label)),
            ),
            FieldDescriptor::<Self>::new::<i32>(
                "secret",
                "i32",
                |this| {
                    if this.locked {
                        Err(AccessError::new("vault is locked"))
                    } else {
                        Ok(FieldValue::field_ref(&this.secret))
                    }
                },
                |this| {
                    if this.locked {
                        Err(AccessError::new("vault is locked"))
                    } else {
                        Ok(FieldValue::field_mut(&mut this.secret))
                    }
                },
            ),
            FieldDescriptor::<Self>::new::<i64>(
                "$change",
                "i64",
                |_| Err(AccessError::new("instrumentation only")),
                |_| Err(AccessError::new("instrumentation only")),
            ),
        ];

        fn instantiate() -> Result<Self, InstantiationError> {
            Ok(Vault {
                locked: false,
                label: String::new(),
                secret: 0,
            })
        }
    }

    #[test]
    fn access_failures_are_recorded() {
        let mut vault = Vault {
            locked: true,
            label: "gold".to_string(),
            secret: 99,
        };

        let (node, report) = marshal_with_report(&vault);
        assert_eq!(Value::Object(node), json!({ "label": "gold", "secret": null }));
        assert_eq!(report.failure_count(), 1);
        assert_eq!(
            report.errors()[0].kind(),
            &FieldErrorKind::Access(AccessError::new("vault is locked"))
        );

        let node = object(json!({ "label": "silver", "secret": 1 }));
        let report = unmarshal_with_report(&mut vault, &node);
        assert_eq!(vault.label, "silver");
        assert_eq!(vault.secret, 99);
        assert_eq!(report.errors()[0].path(), "secret");

        vault.locked = false;
        assert!(unmarshal_with_report(&mut vault, &node).is_complete());
        assert_eq!(vault.secret, 1);
    }

    // -------------------------------------------------------------------------
    // Instantiation

    #[derive(Convertible, Debug, PartialEq)]
    #[marshal(no_default)]
    struct Handle {
        raw: u32,
    }

    #[derive(Convertible, Default)]
    struct Holder {
        handle: Option<Handle>,
        count: u32,
    }

    #[test]
    fn instantiation_failure_is_recorded() {
        let mut holder = Holder::default();
        let node = object(json!({ "handle": { "raw": 5 }, "count": 2 }));

        let report = unmarshal_with_report(&mut holder, &node);

        assert_eq!(holder.handle, None);
        assert_eq!(holder.count, 2);
        assert_eq!(
            report.errors()[0].kind(),
            &FieldErrorKind::Instantiation(InstantiationError::new("Handle"))
        );

        // An existing instance needs no construction.
        holder.handle = Some(Handle { raw: 0 });
        assert!(unmarshal_with_report(&mut holder, &node).is_complete());
        assert_eq!(holder.handle, Some(Handle { raw: 5 }));
    }

    #[test]
    fn null_never_instantiates() {
        let mut holder = Holder::default();
        let node = object(json!({ "handle": null, "count": 1 }));

        assert!(unmarshal_with_report(&mut holder, &node).is_complete());
        assert_eq!(holder.handle, None);
    }

    // -------------------------------------------------------------------------
    // Required nested values

    #[derive(Convertible, Default, Debug, PartialEq)]
    struct Envelope {
        header: Inner,
        seq: u32,
    }

    #[test]
    fn required_nested_value_round_trips() {
        let envelope = Envelope {
            header: Inner {
                flag: true,
                values: vec![5, 6],
            },
            seq: 2,
        };
        let node = marshal(&envelope);
        assert_eq!(
            Value::Object(node.clone()),
            json!({ "header": { "flag": true, "values": [5, 6] }, "seq": 2 })
        );

        let mut restored = Envelope::default();
        assert!(unmarshal_with_report(&mut restored, &node).is_complete());
        assert_eq!(restored, envelope);

        let report = unmarshal_with_report(&mut restored, &object(json!({ "header": 3, "seq": null })));
        assert_eq!(restored, envelope);
        assert_eq!(report.errors()[0].path(), "header");
        assert_eq!(
            report.errors()[0].kind(),
            &FieldErrorKind::Shape(ShapeError::mismatch("object", &json!(3)))
        );
    }

    // -------------------------------------------------------------------------
    // Unrepresentable leaves

    #[derive(Convertible, Default)]
    struct Reading {
        ratio: f64,
        samples: Vec<f32>,
        label: String,
    }

    #[test]
    fn non_finite_floats_are_reported() {
        let reading = Reading {
            ratio: f64::NAN,
            samples: vec![1.0, f32::INFINITY],
            label: "sensor".to_string(),
        };

        let (node, report) = marshal_with_report(&reading);

        assert_eq!(
            Value::Object(node),
            json!({ "ratio": null, "samples": null, "label": "sensor" })
        );
        let errors = report
            .iter()
            .map(|e| (e.path(), e.kind().clone()))
            .collect::<Vec<_>>();
        assert_eq!(
            errors,
            [
                ("ratio", FieldErrorKind::Shape(ShapeError::NonFinite { type_name: "f64" })),
                ("samples", FieldErrorKind::Shape(ShapeError::NonFinite { type_name: "f32" })),
            ]
        );
    }
}
