//! Titles: centered caption lines above a table or container

use exhibit_core::FormatSpec;

use crate::error::{LayoutError, LayoutResult};
use crate::margin::Margin;

/// Number of entries in the default title ladder
pub const TITLE_LADDER_LEN: usize = 13;

/// Caller overrides for title line formats
#[derive(Debug, Clone, PartialEq, Default)]
pub enum TitleFormats {
    /// The default ladder
    #[default]
    Default,
    /// One spec merged onto every ladder entry
    All(FormatSpec),
    /// Specs merged onto the ladder entry of the same position
    PerLine(Vec<FormatSpec>),
}

impl From<FormatSpec> for TitleFormats {
    fn from(spec: FormatSpec) -> Self {
        TitleFormats::All(spec)
    }
}

impl From<Vec<FormatSpec>> for TitleFormats {
    fn from(list: Vec<FormatSpec>) -> Self {
        TitleFormats::PerLine(list)
    }
}

/// The default title ladder: 20pt, then 16pt twice, then 13pt, all centered
pub fn default_title_ladder() -> Vec<FormatSpec> {
    let line = |size: i64| FormatSpec::new().with("font_size", size).with("align", "center");
    let mut ladder = vec![line(20), line(16), line(16)];
    ladder.resize(TITLE_LADDER_LEN, line(13));
    ladder
}

/// Resolve one format per title line
///
/// `PerLine` overrides are merged positionally and cut the ladder to their own
/// length; whenever fewer formats than lines remain, the last format is
/// repeated.
pub fn title_ladder(overrides: &TitleFormats, lines: usize) -> LayoutResult<Vec<FormatSpec>> {
    let defaults = default_title_ladder();
    let mut ladder = match overrides {
        TitleFormats::Default => defaults,
        TitleFormats::All(spec) => defaults.iter().map(|d| spec.merged_onto(d)).collect(),
        TitleFormats::PerLine(list) if list.is_empty() => defaults,
        TitleFormats::PerLine(list) => {
            if list.len() > lines {
                return Err(LayoutError::TitleFormatMismatch {
                    formats: list.len(),
                    lines,
                });
            }
            list.iter()
                .enumerate()
                .map(|(i, spec)| spec.merged_onto(&defaults[i.min(TITLE_LADDER_LEN - 1)]))
                .collect()
        }
    };
    if let Some(last) = ladder.last().cloned() {
        ladder.resize(lines, last);
    }
    Ok(ladder)
}

/// A block of caption lines, one row each
///
/// The width is supplied by the node the title is attached to: a title spans
/// that node's content.
#[derive(Debug, Clone, PartialEq)]
pub struct Title {
    lines: Vec<String>,
    formats: Vec<FormatSpec>,
    width: u32,
    margin: Margin,
}

impl Title {
    /// Build a title; returns `None` when there are no lines
    pub(crate) fn new(
        lines: Vec<String>,
        formats: &TitleFormats,
        width: u32,
        margin: Margin,
    ) -> LayoutResult<Option<Title>> {
        if lines.is_empty() {
            return Ok(None);
        }
        let formats = title_ladder(formats, lines.len())?;
        Ok(Some(Title {
            lines,
            formats,
            width,
            margin,
        }))
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Resolved format of each line
    pub fn formats(&self) -> &[FormatSpec] {
        &self.formats
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.lines.len() as u32
    }

    pub fn margin(&self) -> Margin {
        self.margin
    }
}
