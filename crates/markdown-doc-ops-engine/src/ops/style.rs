//! Text and paragraph attribute sets.
//!
//! Attribute structs serialize directly into the reference backend's
//! `textStyle` / `paragraphStyle` objects: absent attributes are `None` and
//! skipped, and `fields()` lists the present ones for the update mask.

use markdown_doc_ops_config::Rgb;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DimensionUnit {
    #[serde(rename = "PT")]
    Pt,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Dimension {
    pub magnitude: f64,
    pub unit: DimensionUnit,
}

impl Dimension {
    pub fn pt(magnitude: f64) -> Self {
        Self {
            magnitude,
            unit: DimensionUnit::Pt,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Color {
    pub rgb_color: Rgb,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct OptionalColor {
    pub color: Color,
}

impl OptionalColor {
    pub fn rgb(rgb: Rgb) -> Self {
        Self {
            color: Color { rgb_color: rgb },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WeightedFontFamily {
    pub font_family: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Link {
    pub url: String,
}

/// Character-level attributes.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TextStyle {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bold: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub italic: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strikethrough: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<Link>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weighted_font_family: Option<WeightedFontFamily>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<OptionalColor>,
}

impl TextStyle {
    pub fn bold() -> Self {
        Self {
            bold: Some(true),
            ..Self::default()
        }
    }

    pub fn italic() -> Self {
        Self {
            italic: Some(true),
            ..Self::default()
        }
    }

    pub fn strikethrough() -> Self {
        Self {
            strikethrough: Some(true),
            ..Self::default()
        }
    }

    pub fn link(url: impl Into<String>) -> Self {
        Self {
            link: Some(Link { url: url.into() }),
            ..Self::default()
        }
    }

    pub fn monospace(font_family: impl Into<String>) -> Self {
        Self {
            weighted_font_family: Some(WeightedFontFamily {
                font_family: font_family.into(),
            }),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_background(mut self, rgb: Rgb) -> Self {
        self.background_color = Some(OptionalColor::rgb(rgb));
        self
    }

    /// Unions `other` into `self`. Attributes present in `other` win.
    pub fn merge(&mut self, other: &TextStyle) {
        if other.bold.is_some() {
            self.bold = other.bold;
        }
        if other.italic.is_some() {
            self.italic = other.italic;
        }
        if other.strikethrough.is_some() {
            self.strikethrough = other.strikethrough;
        }
        if other.link.is_some() {
            self.link.clone_from(&other.link);
        }
        if other.weighted_font_family.is_some() {
            self.weighted_font_family.clone_from(&other.weighted_font_family);
        }
        if other.background_color.is_some() {
            self.background_color = other.background_color;
        }
    }

    /// Names of the present attributes, in wire spelling.
    pub fn fields(&self) -> Vec<&'static str> {
        let mut fields = Vec::new();
        if self.bold.is_some() {
            fields.push("bold");
        }
        if self.italic.is_some() {
            fields.push("italic");
        }
        if self.strikethrough.is_some() {
            fields.push("strikethrough");
        }
        if self.link.is_some() {
            fields.push("link");
        }
        if self.weighted_font_family.is_some() {
            fields.push("weightedFontFamily");
        }
        if self.background_color.is_some() {
            fields.push("backgroundColor");
        }
        fields
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum NamedStyleType {
    #[serde(rename = "HEADING_1")]
    Heading1,
    #[serde(rename = "HEADING_2")]
    Heading2,
    #[serde(rename = "HEADING_3")]
    Heading3,
    #[serde(rename = "HEADING_4")]
    Heading4,
    #[serde(rename = "HEADING_5")]
    Heading5,
    #[serde(rename = "HEADING_6")]
    Heading6,
}

impl NamedStyleType {
    /// The heading style for levels 1 through 6.
    pub fn heading(level: u8) -> Option<Self> {
        match level {
            1 => Some(Self::Heading1),
            2 => Some(Self::Heading2),
            3 => Some(Self::Heading3),
            4 => Some(Self::Heading4),
            5 => Some(Self::Heading5),
            6 => Some(Self::Heading6),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DashStyle {
    Solid,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParagraphBorder {
    pub color: OptionalColor,
    pub width: Dimension,
    pub padding: Dimension,
    pub dash_style: DashStyle,
}

impl ParagraphBorder {
    pub fn solid(color: Rgb, width_pt: f64, padding_pt: f64) -> Self {
        Self {
            color: OptionalColor::rgb(color),
            width: Dimension::pt(width_pt),
            padding: Dimension::pt(padding_pt),
            dash_style: DashStyle::Solid,
        }
    }
}

/// Paragraph-level attributes.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParagraphStyle {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub named_style_type: Option<NamedStyleType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub indent_start: Option<Dimension>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub indent_first_line: Option<Dimension>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_left: Option<ParagraphBorder>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_bottom: Option<ParagraphBorder>,
}

impl ParagraphStyle {
    pub fn named(style: NamedStyleType) -> Self {
        Self {
            named_style_type: Some(style),
            ..Self::default()
        }
    }

    pub fn fields(&self) -> Vec<&'static str> {
        let mut fields = Vec::new();
        if self.named_style_type.is_some() {
            fields.push("namedStyleType");
        }
        if self.indent_start.is_some() {
            fields.push("indentStart");
        }
        if self.indent_first_line.is_some() {
            fields.push("indentFirstLine");
        }
        if self.border_left.is_some() {
            fields.push("borderLeft");
        }
        if self.border_bottom.is_some() {
            fields.push("borderBottom");
        }
        fields
    }
}
