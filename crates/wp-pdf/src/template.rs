//! The page template.
//!
//! The template PDF defines the week pages' size and visual background.
//! Unlike the font and logo it is a required input: without its first
//! page there is no page-size reference, so loading failures are fatal.

use std::path::Path;

use lopdf::{Document, ObjectId};
use wp_layout::points_to_mm;

use crate::error::{RenderError, Result};
use crate::objects::{inherited_page_attr, rect};

/// A loaded page template: the document plus its first page's size.
#[derive(Debug)]
pub struct Template {
    doc: Document,
    first_page: ObjectId,
    width_pt: f64,
    height_pt: f64,
}

impl Template {
    /// Load the template and read its first page's MediaBox.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(RenderError::Template(format!(
                "template file {} not found",
                path.display()
            )));
        }
        let doc = Document::load(path)?;
        let first_page = doc
            .get_pages()
            .into_values()
            .next()
            .ok_or_else(|| RenderError::Template("template has no pages".into()))?;
        let media_box = inherited_page_attr(&doc, first_page, b"MediaBox")
            .and_then(|obj| rect(&doc, obj))
            .ok_or_else(|| RenderError::Template("template page has no MediaBox".into()))?;
        Ok(Template {
            doc,
            first_page,
            width_pt: media_box[2] - media_box[0],
            height_pt: media_box[3] - media_box[1],
        })
    }

    /// The underlying document.
    pub fn doc(&self) -> &Document {
        &self.doc
    }

    /// Object id of the template's first page.
    pub fn first_page(&self) -> ObjectId {
        self.first_page
    }

    /// Page width in points.
    pub fn width_pt(&self) -> f64 {
        self.width_pt
    }

    /// Page height in points.
    pub fn height_pt(&self) -> f64 {
        self.height_pt
    }

    /// Page width in millimetres.
    pub fn width_mm(&self) -> f64 {
        points_to_mm(self.width_pt)
    }

    /// Page height in millimetres.
    pub fn height_mm(&self) -> f64 {
        points_to_mm(self.height_pt)
    }
}
