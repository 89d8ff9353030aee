use crate::{
    error::{EntryError, Result},
    item::{Item, ItemRecord, RawEntry},
};
use tracing::warn;

/// The ordered, read-only set of items a run draws from.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    items: Vec<Item>,
}

/// Catalog plus the entries that were skipped while building it.
#[derive(Debug, Clone)]
pub struct CatalogBuild {
    pub catalog: Catalog,
    pub skipped: Vec<EntryError>,
}

impl Catalog {
    pub fn from_items(items: Vec<Item>) -> Self {
        Self { items }
    }

    /// Parses every raw entry into an item.
    ///
    /// With `lenient` unset the first bad entry aborts the build. With it set,
    /// bad entries are logged and returned in [`CatalogBuild::skipped`].
    pub fn build<I>(
        entries: I,
        scaling_constant: f64,
        lenient: bool,
    ) -> std::result::Result<CatalogBuild, EntryError>
    where
        I: IntoIterator<Item = RawEntry>,
    {
        let mut items = Vec::new();
        let mut skipped = Vec::new();
        for (index, entry) in entries.into_iter().enumerate() {
            match Item::from_entry(&entry, scaling_constant) {
                Ok(item) => items.push(item),
                Err(source) => {
                    let err = EntryError {
                        index,
                        name: entry.name,
                        source,
                    };
                    if !lenient {
                        return Err(err);
                    }
                    warn!("skipping catalog entry: {}", err);
                    skipped.push(err);
                }
            }
        }
        Ok(CatalogBuild {
            catalog: Catalog { items },
            skipped,
        })
    }

    pub fn from_records(records: Vec<ItemRecord>, scaling_constant: f64) -> Result<Self> {
        let items = records
            .into_iter()
            .map(|record| record.into_item(scaling_constant))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { items })
    }

    pub fn to_records(&self) -> Vec<ItemRecord> {
        self.items.iter().map(Item::to_record).collect()
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn get(&self, index: usize) -> Option<&Item> {
        self.items.get(index)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
