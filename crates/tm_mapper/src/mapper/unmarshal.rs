use super::Traversal;
use crate::convertible::Convertible;
use crate::error::{FieldErrorKind, ShapeError};
use crate::kind::FieldMut;
use crate::tree::{Node, ObjectNode};

/// Populates every data field of `instance` from the entry of `object`
/// stored under the field's key, in table order.
///
/// A failing field is recorded and left as it was; its siblings are still
/// visited.
pub(crate) fn unmarshal_fields<T: Convertible>(
    instance: &mut T,
    object: &ObjectNode,
    traversal: &mut Traversal,
) {
    for field in T::field_table().enumerate() {
        let key = field.name();

        crate::cfg::debug! {
            log::trace!(
                "unmarshal `{}`.{key}: {} ({})",
                T::TYPE_NAME,
                field.type_name(),
                field.kind(),
            );
        }

        let slot = match field.write(instance) {
            Ok(slot) => slot,
            Err(err) => {
                traversal.record(key, err);
                continue;
            }
        };

        let Some(node) = object.get(key) else {
            traversal.record(key, FieldErrorKind::MissingKey);
            continue;
        };

        if let Err(kind) = unmarshal_field(slot, node, key, traversal) {
            traversal.record(key, kind);
        }
    }
}

fn unmarshal_field(
    slot: FieldMut<'_>,
    node: &Node,
    key: &'static str,
    traversal: &mut Traversal,
) -> Result<(), FieldErrorKind> {
    // `null` leaves every kind of field untouched, and never creates a
    // nested instance.
    if node.is_null() {
        return Ok(());
    }

    match slot {
        FieldMut::Convertible(slot) => {
            let Node::Object(object) = node else {
                return Err(ShapeError::mismatch("object", node).into());
            };
            crate::cfg::debug! {
                if !slot.is_present() {
                    log::trace!("constructing nested value under `{}`", traversal.path_of(key));
                }
            }
            let nested = slot.instance()?;
            traversal.enter(key);
            nested.unmarshal_in(object, traversal);
            traversal.leave();
        }
        FieldMut::Array(slot) => {
            let Node::Array(elements) = node else {
                return Err(ShapeError::mismatch("array", node).into());
            };
            slot.assign(elements)?;
        }
        FieldMut::Passthrough(slot) => slot.assign(node)?,
    }

    Ok(())
}
