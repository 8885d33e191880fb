//! The layout node sum type

use crate::container::{Axis, Container};
use crate::margin::Margin;
use crate::table::Table;
use crate::title::Title;

/// A node of a layout tree
#[derive(Debug, Clone, PartialEq)]
pub enum Exhibit {
    Table(Table),
    Row(Container),
    Column(Container),
}

impl Exhibit {
    pub fn height(&self) -> u32 {
        self.as_node().height()
    }

    pub fn width(&self) -> u32 {
        self.as_node().width()
    }

    pub fn margin(&self) -> Margin {
        self.as_node().margin()
    }

    pub fn title(&self) -> Option<&Title> {
        match self {
            Exhibit::Table(t) => t.title(),
            Exhibit::Row(c) | Exhibit::Column(c) => c.title(),
        }
    }

    /// Borrowed view used by the placement engine
    pub fn as_node(&self) -> Node<'_> {
        match self {
            Exhibit::Table(t) => Node::Table(t),
            Exhibit::Row(c) | Exhibit::Column(c) => Node::Container(c),
        }
    }
}

impl From<Table> for Exhibit {
    fn from(table: Table) -> Self {
        Exhibit::Table(table)
    }
}

impl From<Container> for Exhibit {
    fn from(container: Container) -> Self {
        match container.axis() {
            Axis::Horizontal => Exhibit::Row(container),
            Axis::Vertical => Exhibit::Column(container),
        }
    }
}

/// A borrowed layout node
#[derive(Debug, Clone, Copy)]
pub enum Node<'a> {
    Table(&'a Table),
    Container(&'a Container),
}

impl<'a> Node<'a> {
    pub fn height(&self) -> u32 {
        match self {
            Node::Table(t) => t.height(),
            Node::Container(c) => c.height(),
        }
    }

    pub fn width(&self) -> u32 {
        match self {
            Node::Table(t) => t.width(),
            Node::Container(c) => c.width(),
        }
    }

    pub fn margin(&self) -> Margin {
        match self {
            Node::Table(t) => t.margin(),
            Node::Container(c) => c.margin(),
        }
    }

    pub fn title(&self) -> Option<&'a Title> {
        match self {
            Node::Table(t) => t.title(),
            Node::Container(c) => c.title(),
        }
    }
}

impl<'a> From<&'a Table> for Node<'a> {
    fn from(table: &'a Table) -> Self {
        Node::Table(table)
    }
}

impl<'a> From<&'a Container> for Node<'a> {
    fn from(container: &'a Container) -> Self {
        Node::Container(container)
    }
}

impl<'a> From<&'a Exhibit> for Node<'a> {
    fn from(exhibit: &'a Exhibit) -> Self {
        exhibit.as_node()
    }
}
