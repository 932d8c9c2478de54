//! Core data model: sketch kinds, identities, creation metadata and the
//! tagged query result returned to callers.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{Result, SkizzeError};

/// Maximum length in bytes of an inserted value; longer keys are rejected.
pub const MAX_KEY_SIZE: usize = 32768;

/// Default table sizing when `max_unique_items` is omitted.
pub const DEFAULT_MAX_UNIQUE_ITEMS: u64 = 10_000;

/// Default top-K retention when `size` is omitted.
pub const DEFAULT_RANK_SIZE: u64 = 100;

/// The four sketch kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SketchKind {
    /// Approximate distinct count (HyperLogLog).
    Card,
    /// Approximate per-value frequency (Count-Min).
    Freq,
    /// Approximate top-K ranking (Space-Saving).
    Rank,
    /// Approximate set membership (Bloom filter).
    Memb,
}

impl SketchKind {
    /// All kinds, in the order a domain creates its members.
    pub const ALL: [SketchKind; 4] = [
        SketchKind::Card,
        SketchKind::Freq,
        SketchKind::Rank,
        SketchKind::Memb,
    ];

    /// Short lowercase tag used in listings and persistence.
    pub fn tag(&self) -> &'static str {
        match self {
            SketchKind::Card => "card",
            SketchKind::Freq => "freq",
            SketchKind::Rank => "rank",
            SketchKind::Memb => "memb",
        }
    }

    /// Uppercase form used in the canonical identity string.
    pub fn upper(&self) -> &'static str {
        match self {
            SketchKind::Card => "CARD",
            SketchKind::Freq => "FREQ",
            SketchKind::Rank => "RANK",
            SketchKind::Memb => "MEMB",
        }
    }

    /// Single-byte code used in the serialized header.
    pub fn code(&self) -> u8 {
        match self {
            SketchKind::Card => 1,
            SketchKind::Freq => 2,
            SketchKind::Rank => 3,
            SketchKind::Memb => 4,
        }
    }

    /// Parse a tag in either case form.
    pub fn from_tag(tag: &str) -> Result<Self> {
        match tag.to_ascii_lowercase().as_str() {
            "card" => Ok(SketchKind::Card),
            "freq" => Ok(SketchKind::Freq),
            "rank" => Ok(SketchKind::Rank),
            "memb" => Ok(SketchKind::Memb),
            _ => Err(SkizzeError::InvalidType(tag.to_string())),
        }
    }
}

impl fmt::Display for SketchKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Kind-specific creation parameters. All fields are optional; defaults
/// apply when omitted. `rank` and `capacity` are accepted for
/// compatibility but advisory.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Properties {
    #[serde(default)]
    pub max_unique_items: Option<u64>,
    #[serde(default)]
    pub size: Option<u64>,
    #[serde(default)]
    pub rank: Option<u64>,
    #[serde(default)]
    pub capacity: Option<u64>,
}

impl Properties {
    /// Expected distinct-item capacity, used to size CARD/FREQ/MEMB tables.
    pub fn max_unique_items(&self) -> u64 {
        self.max_unique_items.unwrap_or(DEFAULT_MAX_UNIQUE_ITEMS)
    }

    /// Number of top elements retained by RANK.
    pub fn size(&self) -> u64 {
        self.size.unwrap_or(DEFAULT_RANK_SIZE)
    }
}

/// Metadata describing one sketch: its identity and creation parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Info {
    pub name: String,
    pub kind: SketchKind,
    pub properties: Properties,
}

impl Info {
    pub fn new(name: impl Into<String>, kind: SketchKind, properties: Properties) -> Self {
        Self {
            name: name.into(),
            kind,
            properties,
        }
    }

    /// Canonical identity string, `"{name}.{KIND}"`. Doubles as the storage key.
    pub fn id(&self) -> String {
        format_id(&self.name, self.kind)
    }

    /// Check name and parameter ranges before construction.
    pub fn validate(&self) -> Result<()> {
        validate_name(&self.name)?;
        match self.kind {
            SketchKind::Rank => {
                if self.properties.size() < 1 {
                    return Err(SkizzeError::InvalidProperties(
                        "size must be at least 1".to_string(),
                    ));
                }
            }
            _ => {
                if self.properties.max_unique_items() < 1 {
                    return Err(SkizzeError::InvalidProperties(
                        "max_unique_items must be at least 1".to_string(),
                    ));
                }
            }
        }
        Ok(())
    }
}

/// Canonical identity for a `(name, kind)` pair.
pub fn format_id(name: &str, kind: SketchKind) -> String {
    format!("{}.{}", name, kind.upper())
}

/// Sketch and domain names must be non-empty and must not contain a dot,
/// which separates name from kind in the identity string.
pub fn validate_name(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(SkizzeError::InvalidProperties(
            "name must not be empty".to_string(),
        ));
    }
    if name.contains('.') {
        return Err(SkizzeError::InvalidProperties(format!(
            "name {:?} must not contain '.'",
            name
        )));
    }
    Ok(())
}

/// Reject values that exceed the storage key limit.
pub fn validate_values(values: &[String]) -> Result<()> {
    for value in values {
        if value.len() > MAX_KEY_SIZE {
            return Err(SkizzeError::InvalidProperties(format!(
                "value of {} bytes exceeds the {} byte limit",
                value.len(),
                MAX_KEY_SIZE
            )));
        }
    }
    Ok(())
}

/// Query answer, shaped by the sketch kind that produced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum QueryResult {
    /// CARD: estimated number of distinct values.
    Cardinality(u64),
    /// FREQ: estimated occurrence count per queried value.
    Frequencies(Vec<(String, u64)>),
    /// RANK: tracked elements, count descending, key ascending on ties.
    Rankings(Vec<(String, u64)>),
    /// MEMB: membership verdict per queried value, in input order.
    Memberships(Vec<(String, bool)>),
}
