use std::collections::HashMap;
use std::path::Path;

use tokio::io::AsyncBufReadExt;
use unicode_normalization::UnicodeNormalization;

use crate::record::DictRecord;

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("dataset file not found: {0}")]
    NotFound(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// In-memory dictionary, keyed by the case-folded word.
///
/// Built once during activation and read-only afterwards; concurrent lookups
/// share it behind an `Arc` without locking.
pub struct DictStore {
    entries: HashMap<String, DictRecord>,
}

impl DictStore {
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Exact lookup. The key is case-folded before the probe, so callers may
    /// pass candidates in any casing. A miss is the common case, not an error.
    pub fn lookup(&self, key: &str) -> Option<&DictRecord> {
        self.entries.get(&normalize_key(key))
    }

    /// Parse one dataset row: `word,phonetic,definition,translation,pos,...`.
    ///
    /// Rows with fewer than 5 fields are dropped silently; anything past the
    /// fifth field is ignored. A repeated word overwrites the earlier entry.
    pub fn insert_line(&mut self, line: &str) {
        let line = line.trim_end_matches('\r');
        let fields: Vec<&str> = line.split(',').collect();
        if fields.len() < 5 {
            return;
        }

        self.entries.insert(
            normalize_key(fields[0]),
            DictRecord {
                phonetic: fields[1].to_string(),
                definition: fields[2].to_string(),
                translation: fields[3].to_string(),
                pos: fields[4].to_string(),
            },
        );
    }

    pub fn extend_from_lines<'a, I>(&mut self, lines: I)
    where
        I: IntoIterator<Item = &'a str>,
    {
        for line in lines {
            self.insert_line(line);
        }
    }

    /// Stream a dataset file line by line into a fresh store. The file is
    /// never slurped whole; the ECDICT csv runs to hundreds of megabytes.
    pub async fn load_from_file(path: &Path) -> Result<Self, LoadError> {
        if !path.exists() {
            return Err(LoadError::NotFound(path.display().to_string()));
        }

        let file = tokio::fs::File::open(path).await?;
        let mut lines = tokio::io::BufReader::new(file).lines();

        let mut store = Self::new();
        while let Some(line) = lines.next_line().await? {
            store.insert_line(&line);
        }

        Ok(store)
    }
}

impl Default for DictStore {
    fn default() -> Self {
        Self::new()
    }
}

fn normalize_key(key: &str) -> String {
    key.nfkc().collect::<String>().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_a_full_row() {
        let mut store = DictStore::new();
        store.insert_line("cat,kæt,a small domesticated feline,猫,n.");

        let rec = store.lookup("cat").expect("cat should load");
        assert_eq!(rec.phonetic, "kæt");
        assert_eq!(rec.definition, "a small domesticated feline");
        assert_eq!(rec.translation, "猫");
        assert_eq!(rec.pos, "n.");
    }

    #[test]
    fn drops_short_rows() {
        let mut store = DictStore::new();
        store.insert_line("cat,kæt,a small domesticated feline");

        assert!(store.lookup("cat").is_none());
        assert!(store.is_empty());
    }

    #[test]
    fn lowercases_keys_on_insert() {
        let mut store = DictStore::new();
        store.insert_line("Cat,kæt,a small domesticated feline,猫,n.");

        assert!(store.lookup("cat").is_some());
        assert!(store.lookup("CAT").is_some());
    }

    #[test]
    fn later_duplicate_overwrites_earlier() {
        let mut store = DictStore::new();
        store.insert_line("cat,kæt,first,猫,n.");
        store.insert_line("cat,kæt,second,猫,n.");

        assert_eq!(store.len(), 1);
        assert_eq!(store.lookup("cat").unwrap().definition, "second");
    }

    #[test]
    fn loading_twice_keeps_all_keys() {
        let lines = ["cat,kæt,a feline,猫,n.", "dog,dɒɡ,a canine,狗,n."];

        let mut store = DictStore::new();
        store.extend_from_lines(lines);
        store.extend_from_lines(lines);

        assert_eq!(store.len(), 2);
        assert!(store.lookup("cat").is_some());
        assert!(store.lookup("dog").is_some());
    }

    #[test]
    fn extra_fields_are_ignored() {
        let mut store = DictStore::new();
        store.insert_line("cat,kæt,a feline,猫,n.,1234,extra");

        let rec = store.lookup("cat").unwrap();
        assert_eq!(rec.pos, "n.");
    }

    #[test]
    fn empty_fields_stay_empty() {
        let mut store = DictStore::new();
        store.insert_line("cat,,,猫,");

        let rec = store.lookup("cat").unwrap();
        assert_eq!(rec.phonetic, "");
        assert_eq!(rec.definition, "");
        assert_eq!(rec.translation, "猫");
        assert_eq!(rec.pos, "");
    }

    #[test]
    fn strips_trailing_carriage_return() {
        let mut store = DictStore::new();
        store.insert_line("cat,kæt,a feline,猫,n.\r");

        assert_eq!(store.lookup("cat").unwrap().pos, "n.");
    }
}
