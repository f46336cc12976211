use ahash::AHashMap;

/// Sequence lengths keyed by identifier, with optional sequence content.
///
/// Every identifier in the content map is also present in the length map
/// with the content's length.
#[derive(Debug, Clone, Default)]
pub struct LengthIndex {
    lengths: AHashMap<String, u64>,
    contents: AHashMap<String, String>,
    keep_content: bool,
}

impl LengthIndex {
    /// Index that records lengths only
    pub fn new() -> Self {
        Self::default()
    }

    /// Index that also keeps sequence content, needed for scaffold assembly
    pub fn with_content() -> Self {
        Self {
            keep_content: true,
            ..Self::default()
        }
    }

    /// Record a length without content. Replaces any earlier entry for `id`.
    pub fn insert_length(&mut self, id: impl Into<String>, length: u64) {
        let id = id.into();
        self.contents.remove(&id);
        self.lengths.insert(id, length);
    }

    /// Record a sequence. Content is kept only when the index was built with
    /// [`LengthIndex::with_content`].
    pub fn insert_sequence(&mut self, id: impl Into<String>, sequence: String) {
        let id = id.into();
        self.lengths.insert(id.clone(), sequence.len() as u64);
        if self.keep_content {
            self.contents.insert(id, sequence);
        } else {
            self.contents.remove(&id);
        }
    }

    /// Merge another index into this one; entries from `other` win.
    pub fn extend(&mut self, other: LengthIndex) {
        for (id, len) in other.lengths {
            self.contents.remove(&id);
            self.lengths.insert(id, len);
        }
        if self.keep_content {
            self.contents.extend(other.contents);
        }
    }

    pub fn length(&self, id: &str) -> Option<u64> {
        self.lengths.get(id).copied()
    }

    pub fn content(&self, id: &str) -> Option<&str> {
        self.contents.get(id).map(String::as_str)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.lengths.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.lengths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lengths.is_empty()
    }

    /// All recorded lengths, in no particular order
    pub fn lengths(&self) -> impl Iterator<Item = u64> + '_ {
        self.lengths.values().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> + '_ {
        self.lengths.iter().map(|(id, &len)| (id.as_str(), len))
    }
}

impl FromIterator<(String, u64)> for LengthIndex {
    fn from_iter<T: IntoIterator<Item = (String, u64)>>(iter: T) -> Self {
        let mut index = LengthIndex::new();
        for (id, len) in iter {
            index.insert_length(id, len);
        }
        index
    }
}
