use crate::error::InstantiationError;
use crate::info::{FieldDescriptor, FieldTable};
use crate::mapper::{self, Traversal};
use crate::tree::ObjectNode;

// -----------------------------------------------------------------------------
// Convertible

/// A type that can be converted to and from an [`ObjectNode`].
///
/// Usually implemented through [`derive::Convertible`](crate::derive::Convertible).
///
/// # Examples
///
/// ```
/// use tm_mapper::{Convertible, derive::Convertible, serde_json::json};
///
/// #[derive(Convertible, Default)]
/// #[marshal(rename_all = "camelCase")]
/// struct Account {
///     user_name: String,
///     logins: u32,
/// }
///
/// let account = Account { user_name: "ada".into(), logins: 3 };
/// let node = account.marshal_self();
///
/// assert_eq!(node.get("userName"), Some(&json!("ada")));
/// assert_eq!(Account::TYPE_NAME, "Account");
/// ```
///
/// A hand-written implementation:
///
/// ```
/// use tm_mapper::{Convertible, FieldDescriptor, FieldValue, InstantiationError};
///
/// struct Celsius {
///     degrees: f64,
/// }
///
/// impl Convertible for Celsius {
///     const TYPE_NAME: &'static str = "Celsius";
///     const FIELDS: &'static [FieldDescriptor<Self>] = &[FieldDescriptor::<Self>::new::<f64>(
///         "degrees",
///         "f64",
///         |this| Ok(FieldValue::field_ref(&this.degrees)),
///         |this| Ok(FieldValue::field_mut(&mut this.degrees)),
///     )];
///
///     fn instantiate() -> Result<Self, InstantiationError> {
///         Ok(Celsius { degrees: 0.0 })
///     }
/// }
///
/// let node = Celsius { degrees: 21.5 }.marshal_self();
/// assert_eq!(node["degrees"], 21.5);
/// ```
pub trait Convertible: Sized + 'static {
    /// The name used in diagnostics and [`InstantiationError`]s.
    const TYPE_NAME: &'static str;

    /// The field descriptors, in declaration order.
    const FIELDS: &'static [FieldDescriptor<Self>];

    #[inline]
    fn field_table() -> FieldTable<Self> {
        FieldTable::new(Self::FIELDS)
    }

    /// Constructs an empty instance, used when a node is read into an
    /// `Option<Self>` field that holds `None`.
    fn instantiate() -> Result<Self, InstantiationError>;

    /// Converts `self` into an object node. See [`marshal`](crate::marshal).
    #[inline]
    fn marshal_self(&self) -> ObjectNode {
        crate::marshal(self)
    }

    /// Populates `self` from `node`. See [`unmarshal`](crate::unmarshal).
    #[inline]
    fn unmarshal_self(&mut self, node: &ObjectNode) -> bool {
        crate::unmarshal(self, node)
    }
}

// -----------------------------------------------------------------------------
// DynConvertible

/// The object-safe side of [`Convertible`] used for nested values.
///
/// Implemented for every `T: Convertible`.
pub trait DynConvertible {
    fn type_name(&self) -> &'static str;

    /// Converts `self` into a node, recording failures in `traversal`.
    fn marshal_in(&self, traversal: &mut Traversal) -> ObjectNode;

    /// Populates `self` from `node`, recording failures in `traversal`.
    fn unmarshal_in(&mut self, node: &ObjectNode, traversal: &mut Traversal);
}

impl<T: Convertible> DynConvertible for T {
    #[inline]
    fn type_name(&self) -> &'static str {
        T::TYPE_NAME
    }

    #[inline]
    fn marshal_in(&self, traversal: &mut Traversal) -> ObjectNode {
        mapper::marshal_fields(self, traversal)
    }

    #[inline]
    fn unmarshal_in(&mut self, node: &ObjectNode, traversal: &mut Traversal) {
        mapper::unmarshal_fields(self, node, traversal);
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::{String, ToString};
    use alloc::vec;
    use alloc::vec::Vec;

    use serde_json::{Value, json};

    use crate::derive::Convertible;
    use crate::error::FieldErrorKind;
    use crate::tree::ObjectNode;
    use crate::{Convertible, FieldKind, classify, marshal, unmarshal_with_report};

    fn object(node: Value) -> ObjectNode {
        match node {
            Value::Object(object) => object,
            _ => panic!("not an object"),
        }
    }

    #[derive(Convertible, Default)]
    #[marshal(rename_all = "camelCase", type_name = "profile")]
    struct Profile {
        user_name: String,
        #[marshal(rename = "ID")]
        user_id: u32,
        #[marshal(skip)]
        cache: Vec<u8>,
        r#type: char,
    }

    #[test]
    fn derived_table() {
        let fields = Profile::field_table()
            .enumerate()
            .map(|f| (f.name(), f.type_name(), classify(f)))
            .collect::<Vec<_>>();

        assert_eq!(
            fields,
            [
                ("userName", "String", FieldKind::Passthrough),
                ("ID", "u32", FieldKind::Passthrough),
                ("type", "char", FieldKind::Passthrough),
            ]
        );
        assert_eq!(Profile::TYPE_NAME, "profile");
    }

    #[test]
    fn skipped_fields_are_untouched() {
        let mut profile = Profile {
            user_name: "ada".to_string(),
            user_id: 1,
            cache: vec![1, 2],
            r#type: 'a',
        };

        assert_eq!(
            Value::Object(marshal(&profile)),
            json!({ "userName": "ada", "ID": 1, "type": "a" })
        );

        let node = object(json!({ "userName": "bob", "ID": 2, "type": "b", "cache": [9] }));
        assert!(unmarshal_with_report(&mut profile, &node).is_complete());
        assert_eq!(profile.user_name, "bob");
        assert_eq!((profile.user_id, profile.r#type), (2, 'b'));
        assert_eq!(profile.cache, [1, 2]);
    }

    #[derive(Convertible, Debug, PartialEq)]
    #[marshal(instantiate = Limits::fallback)]
    struct Limits {
        max: u16,
    }

    impl Limits {
        fn fallback() -> Self {
            Limits { max: 10 }
        }
    }

    #[derive(Convertible, Default)]
    struct Service {
        limits: Option<Limits>,
    }

    #[test]
    fn custom_instantiate() {
        let mut service = Service::default();
        let node = object(json!({ "limits": {} }));

        let report = unmarshal_with_report(&mut service, &node);

        assert_eq!(service.limits, Some(Limits { max: 10 }));
        assert_eq!(report.errors()[0].path(), "limits.max");
        assert_eq!(report.errors()[0].kind(), &FieldErrorKind::MissingKey);
    }

    #[derive(Convertible, Default, Debug, PartialEq)]
    struct Point {
        x: i32,
        y: i32,
    }

    #[derive(Convertible, Default)]
    struct Tagged<T> {
        tag: String,
        value: Option<T>,
    }

    #[test]
    fn generic_types() {
        assert_eq!(classify(&Tagged::<Point>::FIELDS[1]), FieldKind::Convertible);
        assert_eq!(Tagged::<Point>::FIELDS[1].type_name(), "Option<T>");

        let tagged = Tagged {
            tag: "origin".to_string(),
            value: Some(Point { x: 0, y: 0 }),
        };
        let node = marshal(&tagged);
        assert_eq!(node["value"], json!({ "x": 0, "y": 0 }));

        let mut restored = Tagged::<Point>::default();
        assert!(unmarshal_with_report(&mut restored, &node).is_complete());
        assert_eq!(restored.value, tagged.value);
    }
}
