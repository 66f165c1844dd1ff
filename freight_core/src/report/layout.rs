//! Shared page geometry and drawing helpers for the report layouts.

use super::canvas::{Color, LineStyle, PageCanvas, Point, TextStyle};

pub const MARGIN_X: f64 = 54.0;
pub const MARGIN_TOP: f64 = 54.0;
pub const MARGIN_BOTTOM: f64 = 54.0;

pub const BRAND: &str = "FreightClassPro";

pub const DISCLAIMER: [&str; 2] = [
    "This calculation is based on NMFC density guidelines and is provided for informational purposes only.",
    "Actual freight class may vary by commodity and carrier. Verify with your carrier before shipping.",
];

pub const BRAND_STYLE: TextStyle = TextStyle::new(22.0).bold().color(Color::BRAND);
pub const TITLE_STYLE: TextStyle = TextStyle::new(14.0);
pub const LABEL_STYLE: TextStyle = TextStyle::new(16.0).bold();
pub const META_STYLE: TextStyle = TextStyle::new(10.0).color(Color::GRAY);
pub const SECTION_STYLE: TextStyle = TextStyle::new(13.0).bold();
pub const BODY_STYLE: TextStyle = TextStyle::new(11.0);
pub const CLASS_STYLE: TextStyle = TextStyle::new(16.0).bold().color(Color::BRAND);
pub const DISCLAIMER_STYLE: TextStyle = TextStyle::new(8.0).color(Color::GRAY);

pub const DISCLAIMER_LEADING: f64 = 12.0;

/// Vertical space the disclaimer needs, including its rule
pub const DISCLAIMER_HEIGHT: f64 = 10.0 + DISCLAIMER_LEADING * DISCLAIMER.len() as f64;

/// Top-down writer that tracks the vertical position on the current page.
pub struct Cursor<'a, C: PageCanvas> {
    canvas: &'a mut C,
    y: f64,
}

impl<'a, C: PageCanvas> Cursor<'a, C> {
    pub fn new(canvas: &'a mut C) -> Self {
        Cursor { canvas, y: MARGIN_TOP }
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    /// Lowest y content may reach on this page
    pub fn safe_bottom(&self) -> f64 {
        self.canvas.page_size().height - MARGIN_BOTTOM
    }

    /// Start a new page if `height` more points would overflow this one.
    ///
    /// Never breaks at the top of a page, so an oversized block is drawn
    /// rather than looping over empty pages.
    pub fn ensure_room(&mut self, height: f64) -> bool {
        if self.y + height > self.safe_bottom() && self.y > MARGIN_TOP {
            self.canvas.add_page();
            self.y = MARGIN_TOP;
            return true;
        }
        false
    }

    /// Draw a line of text at the left margin and advance by `advance`
    pub fn text(&mut self, content: &str, style: &TextStyle, advance: f64) {
        self.canvas.text(MARGIN_X, self.y, content, style);
        self.y += advance;
    }

    /// Full-width horizontal rule, then advance by `advance`
    pub fn rule(&mut self, advance: f64) {
        let width = self.canvas.page_size().width;
        self.canvas.line(
            Point::new(MARGIN_X, self.y),
            Point::new(width - MARGIN_X, self.y),
            &LineStyle::default(),
        );
        self.y += advance;
    }

    pub fn skip(&mut self, amount: f64) {
        self.y += amount;
    }

    pub fn move_to(&mut self, y: f64) {
        self.y = y;
    }

    /// Brand, report title and the upper-cased file label
    pub fn title_block(&mut self, title: &str, file_label: &str) {
        self.text(BRAND, &BRAND_STYLE, 30.0);
        self.text(title, &TITLE_STYLE, 24.0);
        let label = file_label.trim().to_uppercase();
        if !label.is_empty() {
            self.text(&label, &LABEL_STYLE, 24.0);
        }
    }

    pub fn disclaimer(&mut self) {
        self.rule(10.0);
        for line in DISCLAIMER {
            self.text(line, &DISCLAIMER_STYLE, DISCLAIMER_LEADING);
        }
    }
}
