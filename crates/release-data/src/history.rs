//! Canonical release history assembly.
//!
//! Turns the raw releases collected by [`crate::fetch`] into the persisted
//! history: asset names normalized, releases ordered newest first.

use std::cmp::Reverse;

use release_core::models::{CanonicalAsset, CanonicalRelease, RawAsset, RawRelease};
use release_core::time_utils::parse_optional_timestamp;
use tracing::debug;

use crate::normalize::normalize_asset_name;

/// Build the canonical history from raw releases.
///
/// One [`CanonicalRelease`] is produced per input release, asset order is
/// preserved, and the result is sorted by `published_at` descending.  The
/// sort is stable: releases with equal timestamps keep their input order.
/// Releases without a parseable timestamp are placed after every dated
/// release, again in input order.
pub fn build_history(raw: &[RawRelease]) -> Vec<CanonicalRelease> {
    let mut keyed: Vec<_> = raw
        .iter()
        .map(|r| {
            let published = parse_optional_timestamp(r.published_at.as_deref());
            (published, canonicalize_release(r))
        })
        .collect();

    // `None < Some(_)`, so under `Reverse` undated releases land last.
    keyed.sort_by_key(|(published, _)| Reverse(*published));

    let undated = keyed.iter().filter(|(published, _)| published.is_none()).count();
    debug!(
        releases = keyed.len(),
        undated, "built canonical release history"
    );

    keyed.into_iter().map(|(_, release)| release).collect()
}

/// Map one raw release into canonical shape.
pub fn canonicalize_release(release: &RawRelease) -> CanonicalRelease {
    CanonicalRelease {
        name: release.name.clone().unwrap_or_default(),
        published_at: release.published_at.clone(),
        assets: release.assets.iter().map(canonicalize_asset).collect(),
    }
}

/// Map one raw asset, normalizing its name.
pub fn canonicalize_asset(asset: &RawAsset) -> CanonicalAsset {
    CanonicalAsset {
        name: normalize_asset_name(&asset.name),
        label: asset.label.clone(),
        size: asset.size,
        download_count: asset.download_count,
        content_type: asset.content_type.clone(),
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
