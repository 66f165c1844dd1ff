//! Drawing surface abstraction.
//!
//! Coordinates are in points (1/72 in) measured from the top-left corner of
//! the page; the `y` of a text call is the top of the line. The surface is
//! append-only: callers draw, break pages, and finally `finish` it into a
//! document.

use serde::{Deserialize, Serialize};

use crate::errors::FreightResult;

/// Page dimensions in points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PageSize {
    pub width: f64,
    pub height: f64,
}

impl PageSize {
    /// US Letter, 8.5" x 11"
    pub const LETTER: PageSize = PageSize {
        width: 612.0,
        height: 792.0,
    };
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Point { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FontWeight {
    Regular,
    Bold,
}

/// RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color(pub u8, pub u8, pub u8);

impl Color {
    pub const BLACK: Color = Color(0x1a, 0x1a, 0x1a);
    pub const GRAY: Color = Color(0x6b, 0x72, 0x80);
    pub const LIGHT_GRAY: Color = Color(0xd1, 0xd5, 0xdb);
    pub const BRAND: Color = Color(0x1d, 0x4e, 0xd8);

    /// `#rrggbb`
    pub fn hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TextStyle {
    /// Font size in points
    pub size: f64,
    pub weight: FontWeight,
    pub color: Color,
}

impl TextStyle {
    pub const fn new(size: f64) -> Self {
        TextStyle {
            size,
            weight: FontWeight::Regular,
            color: Color::BLACK,
        }
    }

    pub const fn bold(self) -> Self {
        TextStyle {
            weight: FontWeight::Bold,
            ..self
        }
    }

    pub const fn color(self, color: Color) -> Self {
        TextStyle { color, ..self }
    }

    pub fn is_bold(&self) -> bool {
        self.weight == FontWeight::Bold
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineStyle {
    /// Stroke thickness in points
    pub thickness: f64,
    pub color: Color,
}

impl Default for LineStyle {
    fn default() -> Self {
        LineStyle {
            thickness: 0.5,
            color: Color::LIGHT_GRAY,
        }
    }
}

/// An append-only page surface the report layouts draw onto.
pub trait PageCanvas {
    /// What `finish` produces (PDF bytes, recorded operations, ...)
    type Document;

    /// Size of the current page
    fn page_size(&self) -> PageSize;

    /// Place a single line of text with its top-left corner at `(x, y)`
    fn text(&mut self, x: f64, y: f64, content: &str, style: &TextStyle);

    /// Draw a straight line
    fn line(&mut self, from: Point, to: Point, style: &LineStyle);

    /// Start a new page; later drawing goes onto it
    fn add_page(&mut self);

    /// Close the surface and produce the document
    fn finish(self) -> FreightResult<Self::Document>
    where
        Self: Sized;
}

/// One recorded drawing call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DrawOp {
    Text {
        x: f64,
        y: f64,
        content: String,
        style: TextStyle,
    },
    Line {
        from: Point,
        to: Point,
        style: LineStyle,
    },
}

/// Canvas that records drawing calls instead of rendering them.
///
/// Useful for previews, layout inspection and tests.
#[derive(Debug, Clone)]
pub struct RecordingCanvas {
    size: PageSize,
    pages: Vec<Vec<DrawOp>>,
}

impl RecordingCanvas {
    pub fn new(size: PageSize) -> Self {
        RecordingCanvas {
            size,
            pages: vec![Vec::new()],
        }
    }

    pub fn letter() -> Self {
        Self::new(PageSize::LETTER)
    }

    fn current_page(&mut self) -> &mut Vec<DrawOp> {
        if self.pages.is_empty() {
            self.pages.push(Vec::new());
        }
        let last = self.pages.len() - 1;
        &mut self.pages[last]
    }
}

impl PageCanvas for RecordingCanvas {
    type Document = RecordedDocument;

    fn page_size(&self) -> PageSize {
        self.size
    }

    fn text(&mut self, x: f64, y: f64, content: &str, style: &TextStyle) {
        self.current_page().push(DrawOp::Text {
            x,
            y,
            content: content.to_string(),
            style: *style,
        });
    }

    fn line(&mut self, from: Point, to: Point, style: &LineStyle) {
        self.current_page().push(DrawOp::Line {
            from,
            to,
            style: *style,
        });
    }

    fn add_page(&mut self) {
        self.pages.push(Vec::new());
    }

    fn finish(self) -> FreightResult<RecordedDocument> {
        Ok(RecordedDocument {
            page_size: self.size,
            pages: self.pages,
        })
    }
}

/// The output of a [`RecordingCanvas`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordedDocument {
    pub page_size: PageSize,
    pub pages: Vec<Vec<DrawOp>>,
}

impl RecordedDocument {
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Text of every text op on a page, in drawing order
    pub fn page_texts(&self, page: usize) -> Vec<&str> {
        self.pages
            .get(page)
            .map(|ops| {
                ops.iter()
                    .filter_map(|op| match op {
                        DrawOp::Text { content, .. } => Some(content.as_str()),
                        DrawOp::Line { .. } => None,
                    })
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Text of every text op in the document, in drawing order
    pub fn texts(&self) -> Vec<&str> {
        (0..self.pages.len()).flat_map(|page| self.page_texts(page)).collect()
    }

    /// Find the first text op whose content starts with `prefix`
    pub fn find_text(&self, prefix: &str) -> Option<(&str, &TextStyle)> {
        self.pages.iter().flatten().find_map(|op| match op {
            DrawOp::Text { content, style, .. } if content.starts_with(prefix) => {
                Some((content.as_str(), style))
            }
            _ => None,
        })
    }
}
