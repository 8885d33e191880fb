//! Row and Column containers

use crate::error::{size_sum, LayoutError, LayoutResult};
use crate::exhibit::Exhibit;
use crate::margin::Margin;
use crate::title::{Title, TitleFormats};

/// Direction children are laid out in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Side by side (a Row)
    Horizontal,
    /// Stacked (a Column)
    Vertical,
}

impl Axis {
    pub fn name(&self) -> &'static str {
        match self {
            Axis::Horizontal => "Row",
            Axis::Vertical => "Column",
        }
    }
}

/// An ordered group of exhibits laid out along one axis
///
/// A container owns its children. Sizes follow from the children:
///
/// * Row: `height = max(child.height) + max(child title height) + margins + own title`,
///   `width = sum(child.width) + margins`
/// * Column: `height = sum(child.height) + sum(child title heights) + margins + own title`,
///   `width = max(child.width) + margins`
#[derive(Debug, Clone, PartialEq)]
pub struct Container {
    axis: Axis,
    children: Vec<Exhibit>,
    margin: Margin,
    title: Option<Title>,
    height: u32,
    width: u32,
}

impl Container {
    /// Start a Row: children side by side
    pub fn row<E: Into<Exhibit>>(children: impl IntoIterator<Item = E>) -> ContainerBuilder {
        ContainerBuilder::new(Axis::Horizontal, children)
    }

    /// Start a Column: children stacked
    pub fn column<E: Into<Exhibit>>(children: impl IntoIterator<Item = E>) -> ContainerBuilder {
        ContainerBuilder::new(Axis::Vertical, children)
    }

    pub fn axis(&self) -> Axis {
        self.axis
    }

    pub fn children(&self) -> &[Exhibit] {
        &self.children
    }

    pub fn margin(&self) -> Margin {
        self.margin
    }

    pub fn title(&self) -> Option<&Title> {
        self.title.as_ref()
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    /// Width inside the margins
    pub fn content_width(&self) -> u32 {
        self.width - self.margin.horizontal()
    }
}

/// Builder for [`Container`]
#[derive(Debug, Clone)]
pub struct ContainerBuilder {
    axis: Axis,
    children: Vec<Exhibit>,
    margin: Margin,
    title: Vec<String>,
    title_formats: TitleFormats,
}

impl ContainerBuilder {
    fn new<E: Into<Exhibit>>(axis: Axis, children: impl IntoIterator<Item = E>) -> Self {
        Self {
            axis,
            children: children.into_iter().map(Into::into).collect(),
            margin: Margin::ZERO,
            title: Vec::new(),
            title_formats: TitleFormats::Default,
        }
    }

    /// Append a child
    pub fn child<E: Into<Exhibit>>(mut self, child: E) -> Self {
        self.children.push(child.into());
        self
    }

    pub fn margin<M: Into<Margin>>(mut self, margin: M) -> Self {
        self.margin = margin.into();
        self
    }

    pub fn title<S: Into<String>>(mut self, lines: impl IntoIterator<Item = S>) -> Self {
        self.title = lines.into_iter().map(Into::into).collect();
        self
    }

    pub fn title_formats<T: Into<TitleFormats>>(mut self, formats: T) -> Self {
        self.title_formats = formats.into();
        self
    }

    pub fn build(self) -> LayoutResult<Container> {
        if self.children.is_empty() {
            return Err(LayoutError::EmptyContainer(self.axis.name()));
        }

        let node = self.axis.name();
        let heights = self.children.iter().map(Exhibit::height);
        let widths = self.children.iter().map(Exhibit::width);
        let title_heights = self
            .children
            .iter()
            .map(|c| c.title().map_or(0, Title::height));

        let (body_height, content_width) = match self.axis {
            Axis::Horizontal => (
                size_sum(
                    node,
                    [heights.max().unwrap_or(0), title_heights.max().unwrap_or(0)],
                )?,
                size_sum(node, widths)?,
            ),
            Axis::Vertical => (
                size_sum(node, heights.chain(title_heights))?,
                widths.max().unwrap_or(0),
            ),
        };

        let title = Title::new(
            self.title,
            &self.title_formats,
            content_width,
            self.margin.title_margin(),
        )?;
        let height = size_sum(
            node,
            [
                body_height,
                self.margin.top,
                self.margin.bottom,
                title.as_ref().map_or(0, Title::height),
            ],
        )?;
        let width = size_sum(node, [content_width, self.margin.left, self.margin.right])?;

        Ok(Container {
            axis: self.axis,
            children: self.children,
            margin: self.margin,
            title,
            height,
            width,
        })
    }
}
