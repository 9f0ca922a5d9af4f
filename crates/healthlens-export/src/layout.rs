//! Vertical text-flow layout with page-break detection.
//!
//! Layout is a pure pass over a `ReportInput` that produces a
//! [`DocumentLayout`]: every line of every page with its final position. The
//! PDF writer only serializes that plan. Coordinates are PDF user space
//! (origin at the bottom-left corner), so moving down the page decreases `y`.

use healthlens_core::models::report::{ReportInput, Section};

use crate::error::RenderError;
use crate::metrics::{text_width, wrap_text};
use crate::styles::{ReportLayout, ReportStyles};

/// Tolerance for comparing accumulated positions against the floor.
const EPSILON: f32 = 0.01;

/// What a placed line belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineRole {
    Title,
    Heading,
    /// First line of a bulleted entry.
    Entry,
    /// Wrapped line of an entry after its first.
    EntryContinuation,
    Disclaimer,
}

/// A single line of text at its final position.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedLine {
    pub text: String,
    pub x: f32,
    pub baseline: f32,
    pub size: f32,
    pub role: LineRole,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageLayout {
    pub lines: Vec<PlacedLine>,
}

impl PageLayout {
    pub fn lines_with_role(&self, role: LineRole) -> impl Iterator<Item = &PlacedLine> {
        self.lines.iter().filter(move |l| l.role == role)
    }
}

/// The finished layout plan of one report.
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentLayout {
    pub width: f32,
    pub height: f32,
    pub pages: Vec<PageLayout>,
}

impl DocumentLayout {
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }
}

/// The region body content flows through, resolved to user space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContentFrame {
    pub left: f32,
    pub width: f32,
    /// Where continuation pages start.
    pub top: f32,
    /// Where the first page's body starts, below the title.
    pub start: f32,
    /// Lowest `y` body content may reach. Sits above the disclaimer band.
    pub floor: f32,
}

impl ContentFrame {
    pub fn new(layout: &ReportLayout, disclaimer_height: f32) -> Result<Self, RenderError> {
        let geometry = &layout.geometry;
        let height = geometry.height();

        let frame = Self {
            left: geometry.margin_x,
            width: geometry.content_width(),
            top: height - geometry.top_margin,
            start: height - geometry.body_offset,
            floor: geometry
                .bottom_margin
                .max(geometry.disclaimer_offset + disclaimer_height),
        };

        let values = [frame.left, frame.width, frame.top, frame.start, frame.floor];
        if values.iter().any(|v| !v.is_finite()) {
            return Err(RenderError::Layout("non-finite page geometry".to_string()));
        }
        if frame.width <= layout.styles.body_size {
            return Err(RenderError::Layout(format!(
                "content width {:.1}pt leaves no room for text",
                frame.width
            )));
        }
        if frame.usable_height() < layout.styles.body_leading
            || frame.start - frame.floor < layout.styles.heading_gap
        {
            return Err(RenderError::Layout(format!(
                "no room for body text between {:.1}pt and floor {:.1}pt",
                frame.top, frame.floor
            )));
        }

        Ok(frame)
    }

    /// Build the frame for a layout, reserving the disclaimer band.
    pub fn for_layout(layout: &ReportLayout) -> Result<Self, RenderError> {
        let lines = disclaimer_lines(layout);
        Self::new(layout, lines.len() as f32 * layout.styles.disclaimer_leading)
    }

    /// Height available to body content on a continuation page.
    pub fn usable_height(&self) -> f32 {
        self.top - self.floor
    }
}

/// Current write position. Operations return a new cursor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageCursor {
    pub x: f32,
    pub y: f32,
    /// Zero-based page index.
    pub page: usize,
}

impl PageCursor {
    pub fn start(frame: &ContentFrame) -> Self {
        Self {
            x: frame.left,
            y: frame.start,
            page: 0,
        }
    }

    pub fn advanced(self, dy: f32) -> Self {
        Self {
            y: self.y - dy,
            ..self
        }
    }

    /// Page break: the first position of the following page.
    pub fn next_page(self, frame: &ContentFrame) -> Self {
        Self {
            x: frame.left,
            y: frame.top,
            page: self.page + 1,
        }
    }

    pub fn fits(&self, height: f32, frame: &ContentFrame) -> bool {
        self.y - height >= frame.floor - EPSILON
    }

    pub fn at_page_top(&self, frame: &ContentFrame) -> bool {
        self.y >= frame.top - EPSILON
    }
}

/// Where an entry of `height` starts.
///
/// Either the cursor itself or the top of the next page. An entry taller
/// than a whole page is not moved off a page it already starts at the top of.
pub fn place_entry(cursor: PageCursor, height: f32, frame: &ContentFrame) -> PageCursor {
    if cursor.fits(height, frame) || cursor.at_page_top(frame) {
        cursor
    } else {
        cursor.next_page(frame)
    }
}

/// Where a section heading is drawn: its gap must fit above the floor.
pub fn place_heading(cursor: PageCursor, gap: f32, frame: &ContentFrame) -> PageCursor {
    if cursor.fits(gap, frame) {
        cursor
    } else {
        cursor.next_page(frame)
    }
}

/// Lay out a report.
pub fn lay_out(input: &ReportInput, layout: &ReportLayout) -> Result<DocumentLayout, RenderError> {
    let geometry = &layout.geometry;
    let styles = &layout.styles;
    let labels = &layout.labels;
    let frame = ContentFrame::for_layout(layout)?;

    let mut pages = vec![PageLayout::default()];

    let title_width = text_width(&labels.title, styles.title_size);
    pages[0].lines.push(PlacedLine {
        text: labels.title.clone(),
        x: (geometry.width() - title_width) / 2.0,
        baseline: geometry.height() - geometry.title_offset,
        size: styles.title_size,
        role: LineRole::Title,
    });

    let mut cursor = PageCursor::start(&frame);
    for section in Section::ALL {
        cursor = place_heading(cursor, styles.heading_gap, &frame);
        // Like entries, the heading hangs below the cursor.
        page_mut(&mut pages, cursor.page).lines.push(PlacedLine {
            text: labels.heading(section).to_string(),
            x: cursor.x,
            baseline: cursor.y - styles.heading_size,
            size: styles.heading_size,
            role: LineRole::Heading,
        });
        cursor = cursor.advanced(styles.heading_gap);

        for entry in input.entries(section) {
            cursor = flow_entry(&mut pages, cursor, entry, styles, &frame);
        }
    }

    // Force-placed in the reserved band of the last page.
    let lines = disclaimer_lines(layout);
    let block_top = geometry.disclaimer_offset + lines.len() as f32 * styles.disclaimer_leading;
    let last = pages.len() - 1;
    for (i, text) in lines.into_iter().enumerate() {
        pages[last].lines.push(PlacedLine {
            text,
            x: geometry.margin_x,
            baseline: block_top - styles.disclaimer_size - i as f32 * styles.disclaimer_leading,
            size: styles.disclaimer_size,
            role: LineRole::Disclaimer,
        });
    }

    Ok(DocumentLayout {
        width: geometry.width(),
        height: geometry.height(),
        pages,
    })
}

/// Place one bulleted entry and return the cursor below it.
fn flow_entry(
    pages: &mut Vec<PageLayout>,
    cursor: PageCursor,
    entry: &str,
    styles: &ReportStyles,
    frame: &ContentFrame,
) -> PageCursor {
    let text = format!("{} {}", styles.bullet, entry);
    let lines = wrap_text(&text, styles.body_size, frame.width);
    let height = lines.len() as f32 * styles.body_leading;

    let mut cursor = place_entry(cursor, height, frame);
    for (i, text) in lines.into_iter().enumerate() {
        // Only entries taller than a page get here without room.
        if !cursor.fits(styles.body_leading, frame) {
            cursor = cursor.next_page(frame);
        }
        page_mut(pages, cursor.page).lines.push(PlacedLine {
            text,
            x: cursor.x,
            baseline: cursor.y - styles.body_size,
            size: styles.body_size,
            role: if i == 0 {
                LineRole::Entry
            } else {
                LineRole::EntryContinuation
            },
        });
        cursor = cursor.advanced(styles.body_leading);
    }

    cursor.advanced(styles.item_gap)
}

fn disclaimer_lines(layout: &ReportLayout) -> Vec<String> {
    wrap_text(
        &layout.labels.disclaimer,
        layout.styles.disclaimer_size,
        layout.geometry.content_width(),
    )
}

fn page_mut(pages: &mut Vec<PageLayout>, index: usize) -> &mut PageLayout {
    while pages.len() <= index {
        pages.push(PageLayout::default());
    }
    &mut pages[index]
}
