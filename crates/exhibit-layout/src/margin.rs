//! Cell margins around layout nodes

/// Empty cells kept around a node, in cell units
///
/// Converts from a single value (all sides), a `(vertical, horizontal)` pair
/// or a `(top, right, bottom, left)` tuple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Margin {
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
    pub left: u32,
}

impl Margin {
    pub const ZERO: Margin = Margin::new(0, 0, 0, 0);

    pub const fn new(top: u32, right: u32, bottom: u32, left: u32) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    /// `top + bottom`, saturating
    pub fn vertical(&self) -> u32 {
        self.top.saturating_add(self.bottom)
    }

    /// `left + right`, saturating
    pub fn horizontal(&self) -> u32 {
        self.left.saturating_add(self.right)
    }

    /// The margin a title takes from the node it is attached to
    pub(crate) fn title_margin(&self) -> Margin {
        Margin::new(self.top, 0, 0, self.left)
    }
}

impl From<u32> for Margin {
    fn from(m: u32) -> Self {
        Margin::new(m, m, m, m)
    }
}

impl From<(u32, u32)> for Margin {
    fn from((vertical, horizontal): (u32, u32)) -> Self {
        Margin::new(vertical, horizontal, vertical, horizontal)
    }
}

impl From<(u32, u32, u32, u32)> for Margin {
    fn from((top, right, bottom, left): (u32, u32, u32, u32)) -> Self {
        Margin::new(top, right, bottom, left)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_margin_conversions() {
        assert_eq!(Margin::from(2), Margin::new(2, 2, 2, 2));
        assert_eq!(Margin::from((1, 3)), Margin::new(1, 3, 1, 3));
        assert_eq!(Margin::from((1, 2, 3, 4)), Margin::new(1, 2, 3, 4));
        assert_eq!(Margin::from((1, 2, 3, 4)).vertical(), 4);
        assert_eq!(Margin::from((1, 2, 3, 4)).horizontal(), 6);
        assert_eq!(Margin::from((1, 2, 3, 4)).title_margin(), Margin::new(1, 0, 0, 4));
        assert_eq!(Margin::from(u32::MAX).vertical(), u32::MAX);
    }
}
