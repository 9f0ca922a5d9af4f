use serde::{Deserialize, Serialize};

use healthlens_core::models::report::Section;

/// Supported paper sizes, in PostScript points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PageSize {
    #[default]
    Letter,
    A4,
}

impl PageSize {
    /// `(width, height)` in points.
    pub fn dimensions(&self) -> (f32, f32) {
        match self {
            PageSize::Letter => (612.0, 792.0),
            PageSize::A4 => (595.28, 841.89),
        }
    }
}

impl std::str::FromStr for PageSize {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "letter" => Ok(PageSize::Letter),
            "a4" => Ok(PageSize::A4),
            other => Err(format!("unknown page size: {other}")),
        }
    }
}

/// Page size and margins. Offsets are measured from the page edge they
/// name; the layout converts them to PDF user space (origin bottom-left).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageGeometry {
    pub size: PageSize,

    /// Left margin; the right margin mirrors it.
    pub margin_x: f32,

    /// Distance from the top edge where continuation pages start.
    pub top_margin: f32,

    /// Lowest distance from the bottom edge body content may reach.
    pub bottom_margin: f32,

    /// Title baseline, measured from the top edge.
    pub title_offset: f32,

    /// Where the first section starts on the first page, from the top edge.
    pub body_offset: f32,

    /// Bottom edge of the disclaimer block, from the bottom edge.
    pub disclaimer_offset: f32,
}

impl PageGeometry {
    pub fn width(&self) -> f32 {
        self.size.dimensions().0
    }

    pub fn height(&self) -> f32 {
        self.size.dimensions().1
    }

    pub fn content_width(&self) -> f32 {
        self.width() - 2.0 * self.margin_x
    }
}

impl Default for PageGeometry {
    fn default() -> Self {
        Self {
            size: PageSize::Letter,
            margin_x: 50.0,
            top_margin: 50.0,
            bottom_margin: 50.0,
            title_offset: 50.0,
            body_offset: 100.0,
            disclaimer_offset: 40.0,
        }
    }
}

/// Font sizes and vertical rhythm, in points.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportStyles {
    pub title_size: f32,
    pub heading_size: f32,
    pub body_size: f32,
    pub body_leading: f32,
    pub disclaimer_size: f32,
    pub disclaimer_leading: f32,

    /// Space between a heading baseline and the first entry.
    pub heading_gap: f32,

    /// Space after each entry.
    pub item_gap: f32,

    pub bullet: char,
}

impl Default for ReportStyles {
    fn default() -> Self {
        Self {
            title_size: 18.0,
            heading_size: 14.0,
            body_size: 10.0,
            body_leading: 12.0,
            disclaimer_size: 8.0,
            disclaimer_leading: 10.0,
            heading_gap: 25.0,
            item_gap: 10.0,
            bullet: '\u{2022}',
        }
    }
}

/// Fixed report wording.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportLabels {
    pub title: String,
    pub summary: String,
    pub considerations: String,
    pub recommendations: String,
    pub disclaimer: String,
}

impl ReportLabels {
    pub fn heading(&self, section: Section) -> &str {
        match section {
            Section::Summary => &self.summary,
            Section::Considerations => &self.considerations,
            Section::Recommendations => &self.recommendations,
        }
    }
}

impl Default for ReportLabels {
    fn default() -> Self {
        Self {
            title: "HealthLens Symptom Report".to_string(),
            summary: "Identified Symptoms".to_string(),
            considerations: "Potential Considerations".to_string(),
            recommendations: "Recommended Actions".to_string(),
            disclaimer: "Disclaimer: This report is for informational purposes only \
                         and is not a medical diagnosis. Consult a healthcare professional."
                .to_string(),
        }
    }
}

/// All static layout constants of a report.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReportLayout {
    pub geometry: PageGeometry,
    pub styles: ReportStyles,
    pub labels: ReportLabels,
}

impl ReportLayout {
    pub fn with_page_size(size: PageSize) -> Self {
        let mut layout = Self::default();
        layout.geometry.size = size;
        layout
    }
}
