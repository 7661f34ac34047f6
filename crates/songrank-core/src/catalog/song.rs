use serde::{Deserialize, Serialize};

/// One appearance of a song on one source's list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SongEntry {
    /// Name of the source in the catalog.
    #[serde(alias = "name")]
    pub source: String,
    /// Published position, or `None` for entries of unranked sources.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rank: Option<f64>,
}

impl SongEntry {
    pub fn ranked(source: impl Into<String>, rank: f64) -> Self {
        Self {
            source: source.into(),
            rank: Some(rank),
        }
    }

    /// Entry scored at the source's shadow rank.
    pub fn shadow(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            rank: None,
        }
    }
}

/// A song and every list it appears on.
///
/// Identity fields default to empty when absent from the input so a
/// malformed record can be reported and dropped instead of failing the
/// whole table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Song {
    #[serde(default)]
    pub id: String,
    #[serde(default, alias = "name")]
    pub title: String,
    #[serde(default)]
    pub artist: String,
    #[serde(default, alias = "sources")]
    pub entries: Vec<SongEntry>,
}

impl Song {
    pub fn new(id: impl Into<String>, title: impl Into<String>, artist: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            artist: artist.into(),
            entries: Vec::new(),
        }
    }

    pub fn with_entry(mut self, entry: SongEntry) -> Self {
        self.entries.push(entry);
        self
    }

    pub fn ranked_on(self, source: impl Into<String>, rank: f64) -> Self {
        self.with_entry(SongEntry::ranked(source, rank))
    }

    pub fn listed_on(self, source: impl Into<String>) -> Self {
        self.with_entry(SongEntry::shadow(source))
    }

    /// Number of list appearances in the input.
    pub fn list_count(&self) -> usize {
        self.entries.len()
    }

    /// First blank identity field, in `id`, `title`, `artist` order.
    pub fn missing_identity_field(&self) -> Option<&'static str> {
        [
            ("id", &self.id),
            ("title", &self.title),
            ("artist", &self.artist),
        ]
        .into_iter()
        .find(|(_, value)| value.trim().is_empty())
        .map(|(field, _)| field)
    }
}
