//! PDF canvas backed by Typst.
//!
//! Every drawing call becomes an absolutely positioned `#place` element in a
//! generated Typst source; page breaks become `#pagebreak()`. `finish`
//! compiles the source in a minimal in-memory world and exports PDF bytes.

use chrono::Utc;
use once_cell::sync::Lazy;
use typst::diag::{FileError, FileResult};
use typst::foundations::{Bytes, Datetime};
use typst::syntax::{FileId, Source};
use typst::text::{Font, FontBook};
use typst::utils::LazyHash;
use typst::{Library, LibraryExt, World};
use typst_pdf::PdfOptions;

use super::canvas::{FontWeight, LineStyle, PageCanvas, PageSize, Point, TextStyle};
use crate::errors::{FreightError, FreightResult};

/// Fonts bundled with typst-assets, parsed once per process.
static FONTS: Lazy<Vec<Font>> = Lazy::new(|| {
    typst_assets::fonts()
        .flat_map(|font_bytes| Font::iter(Bytes::new(font_bytes.to_vec())))
        .collect()
});

// ============================================================================
// Typst World Implementation
// ============================================================================

/// A minimal Typst world for compiling one generated document.
struct PdfWorld {
    /// The main source document
    main: Source,
    /// Font book
    book: LazyHash<FontBook>,
    /// Library (standard functions)
    library: LazyHash<Library>,
}

impl PdfWorld {
    fn new(source: String) -> Self {
        PdfWorld {
            main: Source::detached(source),
            book: LazyHash::new(FontBook::from_fonts(FONTS.iter())),
            library: LazyHash::new(Library::default()),
        }
    }
}

impl World for PdfWorld {
    fn library(&self) -> &LazyHash<Library> {
        &self.library
    }

    fn book(&self) -> &LazyHash<FontBook> {
        &self.book
    }

    fn main(&self) -> FileId {
        self.main.id()
    }

    fn source(&self, id: FileId) -> FileResult<Source> {
        if id == self.main.id() {
            Ok(self.main.clone())
        } else {
            Err(FileError::NotFound(id.vpath().as_rootless_path().into()))
        }
    }

    fn file(&self, id: FileId) -> FileResult<Bytes> {
        Err(FileError::NotFound(id.vpath().as_rootless_path().into()))
    }

    fn font(&self, index: usize) -> Option<Font> {
        FONTS.get(index).cloned()
    }

    fn today(&self, _offset: Option<i64>) -> Option<Datetime> {
        let now = Utc::now();
        Datetime::from_ymd(
            now.format("%Y").to_string().parse().ok()?,
            now.format("%m").to_string().parse().ok()?,
            now.format("%d").to_string().parse().ok()?,
        )
    }
}

// ============================================================================
// Canvas
// ============================================================================

/// Canvas producing PDF bytes.
#[derive(Debug, Clone)]
pub struct TypstCanvas {
    size: PageSize,
    pages: Vec<Vec<String>>,
}

impl TypstCanvas {
    pub fn new(size: PageSize) -> Self {
        TypstCanvas {
            size,
            pages: vec![Vec::new()],
        }
    }

    pub fn letter() -> Self {
        Self::new(PageSize::LETTER)
    }

    fn push(&mut self, element: String) {
        match self.pages.last_mut() {
            Some(page) => page.push(element),
            None => self.pages.push(vec![element]),
        }
    }

    /// The Typst source compiled by `finish`
    pub fn source(&self) -> String {
        let mut source = format!(
            "#set page(width: {}pt, height: {}pt, margin: 0pt)\n",
            self.size.width, self.size.height
        );
        for (index, page) in self.pages.iter().enumerate() {
            if index > 0 {
                source.push_str("#pagebreak()\n");
            }
            for element in page {
                source.push_str(element);
                source.push('\n');
            }
        }
        source
    }
}

impl PageCanvas for TypstCanvas {
    type Document = Vec<u8>;

    fn page_size(&self) -> PageSize {
        self.size
    }

    fn text(&mut self, x: f64, y: f64, content: &str, style: &TextStyle) {
        let weight = match style.weight {
            FontWeight::Regular => "regular",
            FontWeight::Bold => "bold",
        };
        self.push(format!(
            "#place(top + left, dx: {:.2}pt, dy: {:.2}pt, text(size: {:.1}pt, weight: \"{}\", fill: rgb(\"{}\"), {}))",
            x,
            y,
            style.size,
            weight,
            style.color.hex(),
            typst_string(content),
        ));
    }

    fn line(&mut self, from: Point, to: Point, style: &LineStyle) {
        self.push(format!(
            "#place(top + left, line(start: ({:.2}pt, {:.2}pt), end: ({:.2}pt, {:.2}pt), stroke: {:.2}pt + rgb(\"{}\")))",
            from.x,
            from.y,
            to.x,
            to.y,
            style.thickness,
            style.color.hex(),
        ));
    }

    fn add_page(&mut self) {
        self.pages.push(Vec::new());
    }

    fn finish(self) -> FreightResult<Vec<u8>> {
        let world = PdfWorld::new(self.source());

        let warned = typst::compile(&world);

        let document = warned.output.map_err(|errors| {
            let error_msgs: Vec<String> = errors.iter().map(|e| e.message.to_string()).collect();
            FreightError::render_error("typst compile", error_msgs.join("; "))
        })?;

        typst_pdf::pdf(&document, &PdfOptions::default()).map_err(|errors| {
            let error_msgs: Vec<String> = errors.iter().map(|e| e.message.to_string()).collect();
            FreightError::render_error("pdf export", error_msgs.join("; "))
        })
    }
}

/// Quote user text as a Typst string literal, so markup characters in load
/// names or labels are printed verbatim.
fn typst_string(s: &str) -> String {
    let mut quoted = String::with_capacity(s.len() + 2);
    quoted.push('"');
    for c in s.chars() {
        match c {
            '\\' => quoted.push_str("\\\\"),
            '"' => quoted.push_str("\\\""),
            '\n' => quoted.push_str("\\n"),
            '\r' => quoted.push_str("\\r"),
            '\t' => quoted.push_str("\\t"),
            _ => quoted.push(c),
        }
    }
    quoted.push('"');
    quoted
}
