use alloc::string::ToString;
use alloc::vec::Vec;

use super::Traversal;
use crate::convertible::Convertible;
use crate::kind::FieldRef;
use crate::tree::{Node, ObjectNode};

/// Converts every data field of `instance` into an entry of a new object
/// node, in table order.
pub(crate) fn marshal_fields<T: Convertible>(instance: &T, traversal: &mut Traversal) -> ObjectNode {
    let mut object = ObjectNode::new();

    for field in T::field_table().enumerate() {
        let key = field.name();

        crate::cfg::debug! {
            log::trace!(
                "marshal `{}`.{key}: {} ({})",
                T::TYPE_NAME,
                field.type_name(),
                field.kind(),
            );
        }

        let node = match field.read(instance) {
            Ok(view) => marshal_field(view, key, traversal),
            Err(err) => {
                traversal.record(key, err);
                Node::Null
            }
        };

        object.insert(key.to_string(), node);
    }

    object
}

fn marshal_field(view: FieldRef<'_>, key: &'static str, traversal: &mut Traversal) -> Node {
    let leaves = match view {
        FieldRef::Convertible(Some(nested)) => {
            traversal.enter(key);
            let object = nested.marshal_in(traversal);
            traversal.leave();
            return Node::Object(object);
        }
        FieldRef::Array(Some(array)) => (0..array.len())
            .filter_map(|index| array.element(index))
            .map(|element| element.to_node())
            .collect::<Result<Vec<_>, _>>()
            .map(Node::Array),
        FieldRef::Passthrough(Some(scalar)) => scalar.to_node(),
        FieldRef::Convertible(None) | FieldRef::Array(None) | FieldRef::Passthrough(None) => {
            return Node::Null;
        }
    };

    // A value with no node representation is emitted as `null`.
    leaves.unwrap_or_else(|err| {
        traversal.record(key, err);
        Node::Null
    })
}
