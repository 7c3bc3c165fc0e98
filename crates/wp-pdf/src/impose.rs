//! Structural rewriting of finished documents.
//!
//! Two operations, both built on Form XObjects: stamping the template
//! page behind every week page of the primary document, and repacking
//! the primary document two pages per sheet into the secondary one.

use std::collections::BTreeMap;

use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Dictionary, Document, Object, ObjectId, Stream};
use tracing::{debug, info};

use crate::error::{RenderError, Result};
use crate::objects::{import_object, inherited_page_attr, rect, resolve};
use crate::template::Template;

const STAMP_NAME: &[u8] = b"TplBg";

/// Wrap one page of `src` into a Form XObject in `dest` and return its
/// object id.  `imported` is shared across calls so objects the source
/// pages have in common (fonts, the template resources) are copied once.
fn page_as_xobject(
    dest: &mut Document,
    src: &Document,
    page_id: ObjectId,
    imported: &mut BTreeMap<ObjectId, ObjectId>,
) -> Result<ObjectId> {
    let content = src.get_page_content(page_id)?;
    let media_box = inherited_page_attr(src, page_id, b"MediaBox")
        .and_then(|obj| rect(src, obj))
        .ok_or_else(|| RenderError::Malformed("page has no MediaBox".into()))?;
    let resources = match inherited_page_attr(src, page_id, b"Resources") {
        Some(obj) => {
            let resolved = resolve(src, obj)?.clone();
            import_object(dest, src, &resolved, imported)?
        }
        None => Object::Dictionary(Dictionary::new()),
    };

    let mut dict = dictionary! {
        "Type" => "XObject",
        "Subtype" => "Form",
        "BBox" => Object::Array(media_box.iter().map(|v| Object::Real(*v as f32)).collect()),
    };
    dict.set("Resources", resources);
    Ok(dest.add_object(Stream::new(dict, content)))
}

/// Draw the stamp XObject under existing content: save state, invoke,
/// restore.  Prepended, so the page's own marks paint over it.
fn stamp_stream() -> Result<Stream> {
    let ops = Content {
        operations: vec![
            Operation::new("q", vec![]),
            Operation::new("Do", vec![Object::Name(STAMP_NAME.to_vec())]),
            Operation::new("Q", vec![]),
        ],
    };
    Ok(Stream::new(dictionary! {}, ops.encode()?))
}

/// Stamp the template's first page behind every page of `doc` except
/// the first (the cover keeps its own background).
pub fn stamp_template(doc: &mut Document, template: &Template) -> Result<()> {
    let mut imported = BTreeMap::new();
    let xobject_id = page_as_xobject(
        doc,
        template.doc(),
        template.first_page(),
        &mut imported,
    )?;

    let pages: Vec<ObjectId> = doc.get_pages().into_values().skip(1).collect();
    info!(pages = pages.len(), "stamping template behind week pages");

    for page_id in pages {
        let stamp_id = doc.add_object(stamp_stream()?);

        // rebuild Contents as an array with the stamp first
        let mut contents: Vec<Object> = vec![Object::Reference(stamp_id)];
        match doc.get_object(page_id)?.as_dict()?.get(b"Contents") {
            Ok(Object::Reference(id)) => {
                // a reference may point at a single stream or an array
                match doc.get_object(*id)? {
                    Object::Array(items) => contents.extend(items.clone()),
                    _ => contents.push(Object::Reference(*id)),
                }
            }
            Ok(Object::Array(items)) => contents.extend(items.clone()),
            Ok(other) => contents.push(other.clone()),
            Err(_) => {}
        }

        // merge the stamp name into the page's own XObject resources;
        // Resources may be inherited or referenced, so a private copy
        // lands inline on the page
        let mut resources = match inherited_page_attr(doc, page_id, b"Resources") {
            Some(obj) => resolve(doc, obj)?.as_dict()?.clone(),
            None => Dictionary::new(),
        };
        let mut xobjects = match resources.get(b"XObject") {
            Ok(Object::Reference(id)) => doc.get_object(*id)?.as_dict()?.clone(),
            Ok(Object::Dictionary(d)) => d.clone(),
            _ => Dictionary::new(),
        };
        xobjects.set(STAMP_NAME, Object::Reference(xobject_id));
        resources.set("XObject", Object::Dictionary(xobjects));

        let page = doc.get_object_mut(page_id)?.as_dict_mut()?;
        page.set("Contents", Object::Array(contents));
        page.set("Resources", Object::Dictionary(resources));
    }
    Ok(())
}

/// Repack `src` two pages per sheet: each output page is the source page
/// size doubled in height, with source page 2k on top and 2k+1 below.  A
/// trailing odd page leaves the bottom half blank.
pub fn two_up(src: &Document) -> Result<Document> {
    let src_pages: Vec<ObjectId> = src.get_pages().into_values().collect();
    let first = *src_pages
        .first()
        .ok_or_else(|| RenderError::Malformed("document has no pages".into()))?;
    let media_box = inherited_page_attr(src, first, b"MediaBox")
        .and_then(|obj| rect(src, obj))
        .ok_or_else(|| RenderError::Malformed("page has no MediaBox".into()))?;
    let width = media_box[2] - media_box[0];
    let height = media_box[3] - media_box[1];

    let mut dest = Document::with_version("1.5");
    let pages_id = dest.add_object(Object::Null);
    let mut imported = BTreeMap::new();
    let mut kids = Vec::with_capacity(src_pages.len().div_ceil(2));

    for pair in src_pages.chunks(2) {
        let mut xobjects = Dictionary::new();
        let mut ops = Vec::new();

        // top half: lift the page so its bottom edge sits at y = height
        let top = page_as_xobject(&mut dest, src, pair[0], &mut imported)?;
        xobjects.set("P0", Object::Reference(top));
        ops.extend(place_ops(b"P0", -media_box[0], height - media_box[1]));

        if let Some(&bottom_page) = pair.get(1) {
            let bottom = page_as_xobject(&mut dest, src, bottom_page, &mut imported)?;
            xobjects.set("P1", Object::Reference(bottom));
            ops.extend(place_ops(b"P1", -media_box[0], -media_box[1]));
        }

        let content_id = dest.add_object(Stream::new(
            dictionary! {},
            Content { operations: ops }.encode()?,
        ));
        let page_id = dest.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => Object::Reference(pages_id),
            "MediaBox" => Object::Array(vec![
                Object::Real(0.0),
                Object::Real(0.0),
                Object::Real(width as f32),
                Object::Real((2.0 * height) as f32),
            ]),
            "Resources" => dictionary! {
                "XObject" => Object::Dictionary(xobjects),
            },
            "Contents" => Object::Reference(content_id),
        });
        kids.push(Object::Reference(page_id));
    }

    debug!(
        source_pages = src_pages.len(),
        sheets = kids.len(),
        "repacked two-up"
    );

    let count = kids.len() as i64;
    dest.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => Object::Array(kids),
            "Count" => count,
        }),
    );
    let catalog_id = dest.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => Object::Reference(pages_id),
    });
    dest.trailer.set("Root", catalog_id);
    Ok(dest)
}

fn place_ops(name: &[u8], tx: f64, ty: f64) -> Vec<Operation> {
    vec![
        Operation::new("q", vec![]),
        Operation::new(
            "cm",
            vec![
                Object::Real(1.0),
                Object::Real(0.0),
                Object::Real(0.0),
                Object::Real(1.0),
                Object::Real(tx as f32),
                Object::Real(ty as f32),
            ],
        ),
        Operation::new("Do", vec![Object::Name(name.to_vec())]),
        Operation::new("Q", vec![]),
    ]
}
