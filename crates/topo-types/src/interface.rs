//! PNF interface names
//!
//! Interface names may be structured
//! (`<network-id>-nodeId-<dotted-quad>-ltpId-<digits>`) or opaque. Parsing is
//! total: a name that does not match the pattern is kept as-is with no
//! derived fields.

use std::hash::{Hash, Hasher};
use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

fn interface_name_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^(.*)-nodeId-(\d{1,3}\.\d{1,3}\.\d{1,3}\.\d{1,3})-ltpId-(\d+)$").unwrap()
    })
}

/// Fields derived from a structured interface name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedInterfaceName {
    pub network_id: String,
    pub pnf_id: String,
    pub ltp_id: String,
}

/// A structured or opaque interface identifier.
///
/// Equality and hashing use the raw name only; the parsed fields are derived
/// state, not identity. Two values with the same raw name therefore compare
/// equal even when one was built through [`PInterfaceName::opaque`] and never
/// parsed. The `strict-name-equality` cargo feature swaps in a comparison
/// that also considers the parse outcome.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PInterfaceName {
    raw: String,
    parsed: Option<ParsedInterfaceName>,
}

impl PInterfaceName {
    /// Parse an interface name. Never fails: an unmatched name yields an
    /// opaque value with no derived fields.
    pub fn of(name: impl Into<String>) -> Self {
        let raw = name.into();
        let parsed = interface_name_pattern()
            .captures(&raw)
            .map(|caps| ParsedInterfaceName {
                network_id: caps[1].to_string(),
                pnf_id: caps[2].to_string(),
                ltp_id: caps[3].to_string(),
            });
        if parsed.is_none() {
            log::debug!("interface name '{}' does not match the structured pattern", raw);
        }
        Self { raw, parsed }
    }

    /// Wrap a name without attempting to parse it.
    pub fn opaque(name: impl Into<String>) -> Self {
        Self {
            raw: name.into(),
            parsed: None,
        }
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn is_parsable(&self) -> bool {
        self.parsed.is_some()
    }

    pub fn network_id(&self) -> Option<&str> {
        self.parsed.as_ref().map(|p| p.network_id.as_str())
    }

    pub fn pnf_id(&self) -> Option<&str> {
        self.parsed.as_ref().map(|p| p.pnf_id.as_str())
    }

    pub fn ltp_id(&self) -> Option<&str> {
        self.parsed.as_ref().map(|p| p.ltp_id.as_str())
    }

    /// Reconstruct the name of the PNF this interface belongs to
    /// (`<network-id>-nodeId-<pnf-id>`), when the name is structured.
    pub fn pnf_name(&self) -> Option<String> {
        self.parsed
            .as_ref()
            .map(|p| format!("{}-nodeId-{}", p.network_id, p.pnf_id))
    }
}

#[cfg(not(feature = "strict-name-equality"))]
impl PartialEq for PInterfaceName {
    fn eq(&self, other: &Self) -> bool {
        self.raw == other.raw
    }
}

#[cfg(feature = "strict-name-equality")]
impl PartialEq for PInterfaceName {
    fn eq(&self, other: &Self) -> bool {
        self.raw == other.raw && self.parsed == other.parsed
    }
}

impl Eq for PInterfaceName {}

impl Hash for PInterfaceName {
    // Raw-name hashing is consistent with both equality variants: equal
    // values always share the raw name.
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.raw.hash(state);
    }
}

/// A named interface on a PNF. Equality and hashing use both fields.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PInterface {
    pub pnf_name: String,
    pub name: PInterfaceName,
}

impl PInterface {
    pub fn new(pnf_name: impl Into<String>, name: PInterfaceName) -> Self {
        Self {
            pnf_name: pnf_name.into(),
            name,
        }
    }
}
