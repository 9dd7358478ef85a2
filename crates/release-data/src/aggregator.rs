//! Folding a release history into label-aligned chart series.

use std::collections::HashMap;

use release_core::models::{CanonicalRelease, ChartMatrix, Dataset};
use release_core::settings::ChartOrder;
use tracing::debug;

// ── SeriesAggregator ──────────────────────────────────────────────────────────

/// Stateless helper that turns releases into a [`ChartMatrix`].
pub struct SeriesAggregator;

impl SeriesAggregator {
    /// Aggregate `releases` in the order given.
    ///
    /// * `labels` holds one release name per input release, in input order.
    /// * One dataset per distinct asset name, in first-seen order.
    /// * Every dataset has exactly `labels.len()` points; a release without
    ///   that asset contributes `0`.
    /// * Assets sharing a name inside one release are summed into that
    ///   release's point.
    ///
    /// Never fails; an empty input gives an empty matrix.
    pub fn aggregate(releases: &[CanonicalRelease]) -> ChartMatrix {
        // Pass 1: every series key, in first-seen order.
        let mut index: HashMap<&str, usize> = HashMap::new();
        let mut names: Vec<&str> = Vec::new();
        for asset in releases.iter().flat_map(|r| r.assets.iter()) {
            if !index.contains_key(asset.name.as_str()) {
                index.insert(asset.name.as_str(), names.len());
                names.push(asset.name.as_str());
            }
        }

        // Pass 2: dense zero-filled columns, one slot per release.
        let mut columns: Vec<Vec<u64>> = vec![vec![0; releases.len()]; names.len()];
        for (i, release) in releases.iter().enumerate() {
            for asset in &release.assets {
                let slot = &mut columns[index[asset.name.as_str()]][i];
                *slot = slot.saturating_add(asset.download_count);
            }
        }

        let labels: Vec<String> = releases.iter().map(|r| r.name.clone()).collect();
        let datasets: Vec<Dataset> = names
            .into_iter()
            .zip(columns)
            .map(|(name, data)| Dataset {
                label: name.to_string(),
                data,
            })
            .collect();

        debug!(
            labels = labels.len(),
            datasets = datasets.len(),
            "aggregated chart series"
        );

        ChartMatrix { labels, datasets }
    }

    /// Arrange a stored (newest-first) history for charting.
    pub fn order_for_chart(
        mut history: Vec<CanonicalRelease>,
        order: ChartOrder,
    ) -> Vec<CanonicalRelease> {
        if order == ChartOrder::Chronological {
            history.reverse();
        }
        history
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
