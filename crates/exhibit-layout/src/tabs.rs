//! Sheet groups: one exhibit per named sheet

use crate::exhibit::Exhibit;

/// Ordered `(sheet name, exhibit)` pairs
///
/// Names may repeat; later entries are written onto the same sheet.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Tabs {
    sheets: Vec<(String, Exhibit)>,
}

impl Tabs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an entry
    pub fn sheet<S: Into<String>, E: Into<Exhibit>>(mut self, name: S, exhibit: E) -> Self {
        self.push(name, exhibit);
        self
    }

    pub fn push<S: Into<String>, E: Into<Exhibit>>(&mut self, name: S, exhibit: E) {
        self.sheets.push((name.into(), exhibit.into()));
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Exhibit)> {
        self.sheets.iter().map(|(name, e)| (name.as_str(), e))
    }

    pub fn len(&self) -> usize {
        self.sheets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sheets.is_empty()
    }
}

impl<S: Into<String>, E: Into<Exhibit>> FromIterator<(S, E)> for Tabs {
    fn from_iter<I: IntoIterator<Item = (S, E)>>(iter: I) -> Self {
        let mut tabs = Tabs::new();
        for (name, exhibit) in iter {
            tabs.push(name, exhibit);
        }
        tabs
    }
}
