//! Asset name normalization.
//!
//! Release assets usually embed the release version in their file name
//! (`tool_1.4.0_linux.tar.gz`).  Stripping that version gives every build of
//! the same artifact one stable name, which is what lets the chart stage
//! merge download counts across releases.
//!
//! Grammar:
//!
//! ```text
//! asset-name := prefix [ "_" digits "." digits "." digits ] rest
//! identity   := prefix rest
//! ```
//!
//! Only the first version suffix is removed; `digits` are ASCII `0-9`.

use std::sync::OnceLock;

use regex::Regex;

/// A parsed asset name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetIdentity {
    /// The name with its first version suffix removed.
    pub name: String,
    /// The removed version, without the leading underscore (`"1.4.0"`).
    pub version: Option<String>,
}

fn version_suffix() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"_([0-9]+\.[0-9]+\.[0-9]+)").expect("regex is valid"))
}

/// Split `name` into its logical identity and the embedded version.
///
/// # Examples
///
/// ```
/// use release_data::normalize::parse_asset_identity;
///
/// let id = parse_asset_identity("tool_1.4.0_linux.tar.gz");
/// assert_eq!(id.name, "tool_linux.tar.gz");
/// assert_eq!(id.version.as_deref(), Some("1.4.0"));
/// ```
pub fn parse_asset_identity(name: &str) -> AssetIdentity {
    let found = version_suffix()
        .captures(name)
        .and_then(|caps| Some((caps.get(0)?, caps.get(1)?)));

    let Some((whole, version)) = found else {
        return AssetIdentity {
            name: name.to_string(),
            version: None,
        };
    };

    let mut stripped = String::with_capacity(name.len() - whole.len());
    stripped.push_str(&name[..whole.start()]);
    stripped.push_str(&name[whole.end()..]);
    AssetIdentity {
        name: stripped,
        version: Some(version.as_str().to_string()),
    }
}

/// Remove the first `_<major>.<minor>.<patch>` substring from `name`.
///
/// Names without a version are returned unchanged.
pub fn normalize_asset_name(name: &str) -> String {
    parse_asset_identity(name).name
}

// ── Tests ─────────────────────────────────────────────────────────────────────
