use std::collections::HashMap;

use sckit_types::ScHname;
use tracing::debug;

use crate::entry::{EntryKind, EntryPoint};
use crate::error::{DispatchError, DispatchResult};

/// The fixed set of entry points a contract exports.
///
/// Built once with [`ExportTableBuilder`] and never modified afterwards.
/// Entries keep their declaration order; the numeric index of an entry is
/// its position in that order.
#[derive(Debug)]
pub struct ExportTable {
    entries: Vec<EntryPoint>,
    by_hname: HashMap<ScHname, usize>,
}

impl ExportTable {
    pub fn builder() -> ExportTableBuilder {
        ExportTableBuilder::default()
    }

    pub fn by_hname(&self, hname: ScHname) -> Option<&EntryPoint> {
        self.by_hname.get(&hname).map(|&i| &self.entries[i])
    }

    pub fn by_index(&self, index: u32) -> Option<&EntryPoint> {
        usize::try_from(index)
            .ok()
            .and_then(|i| self.entries.get(i))
    }

    pub fn by_name(&self, name: &str) -> Option<&EntryPoint> {
        self.by_hname(ScHname::from_name(name))
            .filter(|entry| entry.name() == name)
    }

    /// Entry names in declaration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(EntryPoint::name)
    }

    pub fn entries(&self) -> &[EntryPoint] {
        &self.entries
    }

    /// Entries of one kind, in declaration order.
    pub fn of_kind(&self, kind: EntryKind) -> impl Iterator<Item = &EntryPoint> {
        self.entries.iter().filter(move |e| e.kind() == kind)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Collects entry points and validates them into an [`ExportTable`].
#[derive(Default)]
pub struct ExportTableBuilder {
    entries: Vec<EntryPoint>,
}

impl ExportTableBuilder {
    pub fn entry(mut self, entry: EntryPoint) -> Self {
        self.entries.push(entry);
        self
    }

    /// Finish the table, rejecting repeated names and hname collisions.
    pub fn build(self) -> DispatchResult<ExportTable> {
        let mut by_hname = HashMap::with_capacity(self.entries.len());
        for (i, entry) in self.entries.iter().enumerate() {
            if let Some(&prev) = by_hname.get(&entry.hname()) {
                let prev: &EntryPoint = &self.entries[prev];
                let reason = if prev.name() == entry.name() {
                    entry.name().to_string()
                } else {
                    format!(
                        "{} and {} share hname {}",
                        prev.name(),
                        entry.name(),
                        entry.hname()
                    )
                };
                return Err(DispatchError::DuplicateEntry(reason));
            }
            by_hname.insert(entry.hname(), i);
        }

        debug!(entries = self.entries.len(), "export table built");
        Ok(ExportTable {
            entries: self.entries,
            by_hname,
        })
    }
}
