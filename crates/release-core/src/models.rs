use serde::{Deserialize, Serialize};

// ── Source records ────────────────────────────────────────────────────────────

/// A release object as returned by the releases list endpoint.
///
/// Only the fields the pipeline consumes are modelled; everything else in the
/// payload is ignored.  Nullable or absent fields fall back to their defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawRelease {
    #[serde(default)]
    pub id: u64,
    #[serde(default)]
    pub tag_name: String,
    /// Display name; GitHub sends `null` for releases created without one.
    #[serde(default)]
    pub name: Option<String>,
    /// ISO 8601 publish time; `null` for drafts.
    #[serde(default)]
    pub published_at: Option<String>,
    #[serde(default)]
    pub draft: bool,
    #[serde(default)]
    pub prerelease: bool,
    #[serde(default)]
    pub assets: Vec<RawAsset>,
}

/// A downloadable file attached to a [`RawRelease`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawAsset {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub size: u64,
    #[serde(default)]
    pub download_count: u64,
    #[serde(default)]
    pub content_type: String,
}

// ── Canonical history ─────────────────────────────────────────────────────────

/// One release in the persisted history, with normalized asset names.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CanonicalRelease {
    /// Release name; may be empty and is not guaranteed unique.
    #[serde(default)]
    pub name: String,
    /// Publish timestamp exactly as the source reported it.
    #[serde(default)]
    pub published_at: Option<String>,
    #[serde(default)]
    pub assets: Vec<CanonicalAsset>,
}

/// An asset whose `name` has had its embedded version stripped, so the same
/// binary shares one name across releases.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CanonicalAsset {
    pub name: String,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub size: u64,
    #[serde(default)]
    pub download_count: u64,
    #[serde(default)]
    pub content_type: String,
}

// ── Chart matrix ──────────────────────────────────────────────────────────────

/// One aligned series of download counts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dataset {
    /// Normalized asset name.
    pub label: String,
    /// Download count per chart label, `0` where the asset was absent.
    pub data: Vec<u64>,
}

/// Label-aligned matrix of per-asset download counts.
///
/// Every dataset's `data` has exactly `labels.len()` entries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartMatrix {
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset>,
}

impl ChartMatrix {
    /// Look up the series for a normalized asset name.
    pub fn series(&self, name: &str) -> Option<&Dataset> {
        self.datasets.iter().find(|d| d.label == name)
    }

    /// `true` when every dataset is as long as the label axis.
    pub fn is_aligned(&self) -> bool {
        self.datasets
            .iter()
            .all(|d| d.data.len() == self.labels.len())
    }

    /// Total downloads of one series across all labels.
    pub fn total_for(&self, name: &str) -> Option<u64> {
        self.series(name).map(|d| d.data.iter().sum())
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
