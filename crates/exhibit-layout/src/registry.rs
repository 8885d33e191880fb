//! Format interning
//!
//! Every format used during a render goes through [`FormatRegistry::resolve`],
//! which merges it onto the document default and registers each distinct
//! resolved map with the writer exactly once.

use ahash::AHashMap;
use exhibit_core::FormatSpec;

use crate::error::LayoutResult;
use crate::sink::{FormatId, SheetWriter};

/// Resolved format map to writer handle, for one document
#[derive(Debug, Clone, Default)]
pub struct FormatRegistry {
    default: FormatSpec,
    ids: AHashMap<FormatSpec, FormatId>,
}

impl FormatRegistry {
    /// Create a registry merging every format onto `default`
    pub fn new(default: FormatSpec) -> Self {
        Self {
            default,
            ids: AHashMap::new(),
        }
    }

    pub fn default_format(&self) -> &FormatSpec {
        &self.default
    }

    /// Handle of `spec` merged onto the default, registering it on first use
    pub fn resolve<W: SheetWriter + ?Sized>(
        &mut self,
        writer: &mut W,
        spec: &FormatSpec,
    ) -> LayoutResult<FormatId> {
        let resolved = spec.merged_onto(&self.default);
        if let Some(id) = self.ids.get(&resolved) {
            return Ok(*id);
        }
        let id = writer.add_format(&resolved)?;
        log::debug!("registered format {} as {}", resolved, id.0);
        self.ids.insert(resolved, id);
        Ok(id)
    }

    /// Number of distinct formats registered
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}
