//! printpdf-backed document authoring.
//!
//! [`DocumentAuthor`] owns the document being written and implements
//! [`PageSink`], so the composer drives it page by page without knowing
//! about PDF.  All coordinates arrive in millimetres from the top-left
//! corner and are flipped here to printpdf's bottom-left origin.

use std::io::Cursor;

use printpdf::image_crate::codecs::png::PngDecoder;
use printpdf::{
    BuiltinFont, Image, ImageTransform, IndirectFontRef, Mm, PdfDocument, PdfDocumentReference,
    PdfLayerReference,
};
use tracing::{debug, warn};
use wp_compose::{DayCell, PageSink, WeekHeader};
use wp_core::Asset;
use wp_layout::{cover, truncate_entry, Grid, Position};

use crate::error::{RenderError, Result};

// printpdf embeds raster images at this resolution unless told otherwise.
const IMAGE_DPI: f64 = 300.0;
const MM_PER_INCH: f64 = 25.4;

/// Writes the primary planner document: a cover page followed by one
/// page per week.
pub struct DocumentAuthor {
    doc: PdfDocumentReference,
    layer: PdfLayerReference,
    font: IndirectFontRef,
    grid: Grid,
    page_width: f64,
    page_height: f64,
    pages: u32,
}

impl DocumentAuthor {
    /// Start a new document of `width_mm` x `height_mm` pages.  The first
    /// page becomes the cover.  When no font bytes are supplied the
    /// builtin Helvetica stands in.
    pub fn new(
        title: &str,
        width_mm: f64,
        height_mm: f64,
        grid: Grid,
        font: Asset<Vec<u8>>,
    ) -> Result<Self> {
        // printpdf measures in f32; page metrics stay f64 internally and
        // are cast at this boundary
        let (doc, page, layer) =
            PdfDocument::new(title, Mm(width_mm as f32), Mm(height_mm as f32), "cover");
        let font = match font {
            Asset::Loaded(bytes) => doc
                .add_external_font(bytes.as_slice())
                .map_err(|e| RenderError::Author(e.to_string()))?,
            Asset::Absent => {
                warn!("no embeddable font available, falling back to builtin Helvetica");
                doc.add_builtin_font(BuiltinFont::Helvetica)
                    .map_err(|e| RenderError::Author(e.to_string()))?
            }
        };
        let layer = doc.get_page(page).get_layer(layer);
        Ok(DocumentAuthor {
            doc,
            layer,
            font,
            grid,
            page_width: width_mm,
            page_height: height_mm,
            pages: 1,
        })
    }

    /// Pages written so far, the cover included.
    pub fn page_count(&self) -> u32 {
        self.pages
    }

    fn text(&self, s: &str, size: f32, pos: Position) {
        self.layer.use_text(
            s,
            size,
            Mm(pos.x as f32),
            Mm((self.page_height - pos.y) as f32),
            &self.font,
        );
    }

    /// Draw the cover page: optional logo, title line, and the year in
    /// large print.  An undecodable logo degrades to a cover without it.
    pub fn cover(&mut self, title: &str, year: u16, logo: Asset<Vec<u8>>) {
        if let Asset::Loaded(bytes) = logo {
            match PngDecoder::new(Cursor::new(bytes.as_slice())).and_then(Image::try_from) {
                Ok(image) => self.place_logo(image),
                Err(e) => {
                    warn!(error = %e, "could not decode logo image, cover stays bare");
                }
            }
        }
        self.text(title, cover::TITLE_FONT, cover::TITLE);
        self.text(&year.to_string(), cover::YEAR_FONT, cover::YEAR);
    }

    fn place_logo(&self, image: Image) {
        // natural size at the embedding resolution, scaled to the fixed
        // logo square
        let natural_w_mm = f64::from(image.image.width.0 as u32) * MM_PER_INCH / IMAGE_DPI;
        let natural_h_mm = f64::from(image.image.height.0 as u32) * MM_PER_INCH / IMAGE_DPI;
        if natural_w_mm <= 0.0 || natural_h_mm <= 0.0 {
            warn!("logo image has no pixels, cover stays bare");
            return;
        }
        let transform = ImageTransform {
            translate_x: Some(Mm(cover::LOGO.x as f32)),
            translate_y: Some(Mm(
                (self.page_height - cover::LOGO.y - cover::LOGO_SIZE_MM) as f32
            )),
            scale_x: Some((cover::LOGO_SIZE_MM / natural_w_mm) as f32),
            scale_y: Some((cover::LOGO_SIZE_MM / natural_h_mm) as f32),
            ..Default::default()
        };
        image.add_to_layer(self.layer.clone(), transform);
    }

    /// Finish writing and return the document bytes.
    pub fn finish(self) -> Result<Vec<u8>> {
        debug!(pages = self.pages, "serializing authored document");
        self.doc
            .save_to_bytes()
            .map_err(|e| RenderError::Author(e.to_string()))
    }
}

impl PageSink for DocumentAuthor {
    fn begin_week(&mut self, header: &WeekHeader<'_>) -> wp_core::Result<()> {
        let (page, layer) = self.doc.add_page(
            Mm(self.page_width as f32),
            Mm(self.page_height as f32),
            format!("KW{:02}", header.week),
        );
        self.layer = self.doc.get_page(page).get_layer(layer);
        self.pages += 1;
        self.text(
            header.month_name,
            wp_layout::grid::font::HEADER,
            self.grid.week_title(),
        );
        self.text(
            &format!("{} KW{:02}", header.year, header.week),
            wp_layout::grid::font::HEADER,
            self.grid.week_number(),
        );
        Ok(())
    }

    fn month_note(&mut self, column: u8, month_name: &str) -> wp_core::Result<()> {
        self.text(
            month_name,
            wp_layout::grid::font::HEADER,
            self.grid.month_note(column),
        );
        Ok(())
    }

    fn day(&mut self, cell: &DayCell<'_>) -> wp_core::Result<()> {
        self.text(
            &format!("{:02}.", cell.date.day_of_month()),
            wp_layout::grid::font::DAY_NUMBER,
            self.grid.day_number(cell.column),
        );
        self.text(
            cell.day_abbrev,
            wp_layout::grid::font::DAY_NAME,
            self.grid.day_name(cell.column),
        );
        if let Some(name) = cell.holiday {
            self.text(
                name,
                wp_layout::grid::font::HOLIDAY,
                self.grid.holiday_label(cell.column),
            );
        }
        for (line, entry) in cell.entries.iter().enumerate() {
            self.text(
                truncate_entry(entry),
                wp_layout::grid::font::ENTRY,
                self.grid.entry_line(cell.column, line),
            );
        }
        Ok(())
    }
}
