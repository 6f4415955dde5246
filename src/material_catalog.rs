use crate::error::{Result, RheologyError};
use crate::material::{MaterialEntry, MaterialRecord};
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Built-in rock rheologies, compiled into the crate
const MATERIALS_JSON: &str = include_str!("materials.json");

static BUILTIN_CATALOG: Lazy<MaterialCatalog> = Lazy::new(|| {
    MaterialCatalog::from_json_str(MATERIALS_JSON).expect("embedded materials.json must be a valid catalog")
});

/// Named collection of material records, kept in insertion order.
#[derive(Debug, Clone, Default)]
pub struct MaterialCatalog {
    records: Vec<MaterialRecord>,
    index: HashMap<String, usize>,
}

impl MaterialCatalog {
    /// The catalog shipped with the crate (23 crust and mantle rheologies).
    pub fn builtin() -> &'static MaterialCatalog {
        &BUILTIN_CATALOG
    }

    /// Parse a JSON array of flat material entries.
    ///
    /// Every entry is validated; a later entry with an existing name replaces the earlier one.
    pub fn from_json_str(json_str: &str) -> Result<Self> {
        let entries: Vec<MaterialEntry> = serde_json::from_str(json_str)?;
        entries
            .into_iter()
            .map(MaterialRecord::try_from)
            .collect()
    }

    pub fn insert(&mut self, record: MaterialRecord) {
        match self.index.get(&record.name).copied() {
            Some(i) => self.records[i] = record,
            None => {
                self.index.insert(record.name.clone(), self.records.len());
                self.records.push(record);
            }
        }
    }

    pub fn get(&self, name: &str) -> Result<&MaterialRecord> {
        self.index
            .get(name)
            .map(|&i| &self.records[i])
            .ok_or_else(|| RheologyError::UnknownMaterial(name.to_string()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    pub fn names(&self) -> Vec<&str> {
        self.records.iter().map(|r| r.name.as_str()).collect()
    }

    /// Records ordered by name, the order materials are listed and plotted in.
    pub fn sorted_by_name(&self) -> Vec<&MaterialRecord> {
        let mut sorted: Vec<&MaterialRecord> = self.records.iter().collect();
        sorted.sort_by(|a, b| a.name.cmp(&b.name));
        sorted
    }

    pub fn iter(&self) -> impl Iterator<Item = &MaterialRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl FromIterator<MaterialRecord> for MaterialCatalog {
    fn from_iter<I: IntoIterator<Item = MaterialRecord>>(iter: I) -> Self {
        let mut catalog = MaterialCatalog::default();
        for record in iter {
            catalog.insert(record);
        }
        catalog
    }
}
