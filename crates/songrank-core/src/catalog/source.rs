use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::rank::shadow_midpoint;
use crate::constants::{MIN_RANK, SOURCE_WEIGHT_BOUNDS};
use crate::errors::CatalogError;

/// Whether a source publishes positions for its songs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SourceKind {
    Ranked,
    /// Unordered list; every entry is scored at `shadow_rank`.
    Unranked { shadow_rank: f64 },
}

impl SourceKind {
    /// Unranked list covering positions `first..=last`.
    pub fn unranked_range(first: u32, last: u32) -> Self {
        Self::Unranked {
            shadow_rank: shadow_midpoint(first, last),
        }
    }
}

/// A published "best songs of the year" list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Source {
    pub name: String,
    /// Abbreviated name for compact displays.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub short_name: Option<String>,
    /// Trust weight in [0, 1.5].
    pub weight: f64,
    /// Topical category used for the diversity multiplier.
    pub cluster: String,
    #[serde(flatten)]
    pub kind: SourceKind,
}

impl Source {
    pub fn ranked(name: impl Into<String>, weight: f64, cluster: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            short_name: None,
            weight,
            cluster: cluster.into(),
            kind: SourceKind::Ranked,
        }
    }

    pub fn unranked(
        name: impl Into<String>,
        weight: f64,
        cluster: impl Into<String>,
        shadow_rank: f64,
    ) -> Self {
        Self {
            name: name.into(),
            short_name: None,
            weight,
            cluster: cluster.into(),
            kind: SourceKind::Unranked { shadow_rank },
        }
    }

    pub fn with_short_name(mut self, short_name: impl Into<String>) -> Self {
        self.short_name = Some(short_name.into());
        self
    }

    pub fn display_name(&self) -> &str {
        self.short_name.as_deref().unwrap_or(&self.name)
    }

    pub fn shadow_rank(&self) -> Option<f64> {
        match self.kind {
            SourceKind::Ranked => None,
            SourceKind::Unranked { shadow_rank } => Some(shadow_rank),
        }
    }

    pub fn is_ranked(&self) -> bool {
        matches!(self.kind, SourceKind::Ranked)
    }

    fn validate(&self) -> Result<(), CatalogError> {
        if self.name.trim().is_empty() {
            return Err(CatalogError::EmptySourceName);
        }
        if !self.weight.is_finite() || !SOURCE_WEIGHT_BOUNDS.contains(&self.weight) {
            return Err(CatalogError::WeightOutOfRange {
                source_name: self.name.clone(),
                weight: self.weight,
            });
        }
        if let Some(shadow_rank) = self.shadow_rank() {
            if !shadow_rank.is_finite() || shadow_rank < MIN_RANK {
                return Err(CatalogError::InvalidShadowRank {
                    source_name: self.name.clone(),
                    shadow_rank,
                });
            }
        }
        Ok(())
    }
}

/// Validated, ordered set of sources.
///
/// Catalog order is significant: contributions are summed in this order,
/// which keeps floating-point results identical across implementations
/// that follow the same order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Source>", into = "Vec<Source>")]
pub struct SourceCatalog {
    sources: Vec<Source>,
    index: HashMap<String, usize>,
}

impl SourceCatalog {
    pub fn new(sources: Vec<Source>) -> Result<Self, CatalogError> {
        let mut index = HashMap::with_capacity(sources.len());
        for (position, source) in sources.iter().enumerate() {
            source.validate()?;
            if index.insert(source.name.clone(), position).is_some() {
                return Err(CatalogError::DuplicateSource {
                    name: source.name.clone(),
                });
            }
        }
        Ok(Self { sources, index })
    }

    pub fn get(&self, name: &str) -> Option<&Source> {
        self.index.get(name).map(|&i| &self.sources[i])
    }

    /// Catalog position of the named source.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.index.get(name).copied()
    }

    /// Catalog position and source for `name`.
    pub fn lookup(&self, name: &str) -> Option<(usize, &Source)> {
        let position = self.position(name)?;
        self.sources.get(position).map(|source| (position, source))
    }

    pub fn source_at(&self, position: usize) -> Option<&Source> {
        self.sources.get(position)
    }

    pub fn sources(&self) -> &[Source] {
        &self.sources
    }

    pub fn iter(&self) -> impl Iterator<Item = &Source> {
        self.sources.iter()
    }

    pub fn len(&self) -> usize {
        self.sources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }

    /// Distinct clusters in first-seen catalog order.
    pub fn clusters(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for source in &self.sources {
            if !seen.contains(&source.cluster.as_str()) {
                seen.push(&source.cluster);
            }
        }
        seen
    }
}

impl TryFrom<Vec<Source>> for SourceCatalog {
    type Error = CatalogError;

    fn try_from(sources: Vec<Source>) -> Result<Self, Self::Error> {
        Self::new(sources)
    }
}

impl From<SourceCatalog> for Vec<Source> {
    fn from(catalog: SourceCatalog) -> Self {
        catalog.sources
    }
}
