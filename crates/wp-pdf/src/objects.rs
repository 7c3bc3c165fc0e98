//! Low-level lopdf helpers: page-attribute resolution with Pages-tree
//! inheritance, and deep copy of object graphs between documents.

use std::collections::BTreeMap;

use lopdf::{Dictionary, Document, Object, ObjectId, Stream};

use crate::error::Result;

/// Follow references until a non-reference object is reached.
pub(crate) fn resolve<'a>(doc: &'a Document, mut object: &'a Object) -> Result<&'a Object> {
    while let Object::Reference(id) = object {
        object = doc.get_object(*id)?;
    }
    Ok(object)
}

/// Look up a page attribute, walking up the Pages tree when the page
/// dictionary itself does not carry it (MediaBox and Resources are
/// inheritable).
pub(crate) fn inherited_page_attr<'a>(
    doc: &'a Document,
    page_id: ObjectId,
    key: &[u8],
) -> Option<&'a Object> {
    let mut current = page_id;
    loop {
        let dict = doc.get_object(current).ok()?.as_dict().ok()?;
        if let Ok(value) = dict.get(key) {
            return Some(value);
        }
        current = dict.get(b"Parent").ok()?.as_reference().ok()?;
    }
}

/// Interpret an Integer or Real object as f64.
pub(crate) fn number(object: &Object) -> Option<f64> {
    match object {
        Object::Integer(i) => Some(*i as f64),
        Object::Real(r) => Some(f64::from(*r)),
        _ => None,
    }
}

/// Read a `[x0 y0 x1 y1]` rectangle, resolving references on the array
/// and its elements.
pub(crate) fn rect(doc: &Document, object: &Object) -> Option<[f64; 4]> {
    let array = resolve(doc, object).ok()?.as_array().ok()?;
    if array.len() != 4 {
        return None;
    }
    let mut out = [0.0; 4];
    for (slot, item) in out.iter_mut().zip(array) {
        *slot = number(resolve(doc, item).ok()?)?;
    }
    Some(out)
}

/// Deep-copy `object` from `src` into `dest`, rewriting references.
///
/// `imported` maps source object ids to their copies so shared objects
/// are copied once and reference cycles terminate.
pub(crate) fn import_object(
    dest: &mut Document,
    src: &Document,
    object: &Object,
    imported: &mut BTreeMap<ObjectId, ObjectId>,
) -> Result<Object> {
    Ok(match object {
        Object::Reference(id) => Object::Reference(import_ref(dest, src, *id, imported)?),
        Object::Array(items) => {
            let mut copied = Vec::with_capacity(items.len());
            for item in items {
                copied.push(import_object(dest, src, item, imported)?);
            }
            Object::Array(copied)
        }
        Object::Dictionary(dict) => Object::Dictionary(import_dict(dest, src, dict, imported)?),
        Object::Stream(stream) => {
            // Stream::new restates Length for the carried (possibly still
            // compressed) bytes; the Filter entry travels with the dict.
            let dict = import_dict(dest, src, &stream.dict, imported)?;
            Object::Stream(Stream::new(dict, stream.content.clone()))
        }
        other => other.clone(),
    })
}

fn import_dict(
    dest: &mut Document,
    src: &Document,
    dict: &Dictionary,
    imported: &mut BTreeMap<ObjectId, ObjectId>,
) -> Result<Dictionary> {
    let mut copied = Dictionary::new();
    for (key, value) in dict.iter() {
        copied.set(key.clone(), import_object(dest, src, value, imported)?);
    }
    Ok(copied)
}

fn import_ref(
    dest: &mut Document,
    src: &Document,
    id: ObjectId,
    imported: &mut BTreeMap<ObjectId, ObjectId>,
) -> Result<ObjectId> {
    if let Some(new_id) = imported.get(&id) {
        return Ok(*new_id);
    }
    // reserve the slot before recursing so cycles resolve to it
    let new_id = dest.add_object(Object::Null);
    imported.insert(id, new_id);
    let copied = import_object(dest, src, src.get_object(id)?, imported)?;
    dest.objects.insert(new_id, copied);
    Ok(new_id)
}
