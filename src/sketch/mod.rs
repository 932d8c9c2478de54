//! The four sketch algorithms and their common instance wrapper.
//!
//! A [`SketchInstance`] dispatches insert/query by kind and owns the
//! self-describing wire format: a kind tag byte, a format version byte,
//! then a bincode block holding the parameters and structure payload.

pub mod card;
pub mod freq;
pub mod memb;
pub mod rank;

pub use card::HyperLogLog;
pub use freq::CountMin;
pub use memb::BloomFilter;
pub use rank::TopK;

use crate::datamodel::{Info, QueryResult, SketchKind};
use crate::error::{Result, SkizzeError};

/// Current serialization format version.
const FORMAT_VERSION: u8 = 1;

/// Bytes of header before the bincode block.
const HEADER_LEN: usize = 2;

/// One live sketch of any kind.
#[derive(Debug, Clone)]
pub enum SketchInstance {
    Card(HyperLogLog),
    Freq(CountMin),
    Rank(TopK),
    Memb(BloomFilter),
}

impl SketchInstance {
    /// Construct a fresh instance from validated creation metadata.
    pub fn from_info(info: &Info) -> Result<Self> {
        info.validate()?;
        let props = &info.properties;
        Ok(match info.kind {
            SketchKind::Card => {
                SketchInstance::Card(HyperLogLog::for_capacity(props.max_unique_items()))
            }
            SketchKind::Freq => {
                SketchInstance::Freq(CountMin::for_capacity(props.max_unique_items()))
            }
            SketchKind::Rank => SketchInstance::Rank(TopK::new(props.size())),
            SketchKind::Memb => {
                SketchInstance::Memb(BloomFilter::for_capacity(props.max_unique_items()))
            }
        })
    }

    pub fn kind(&self) -> SketchKind {
        match self {
            SketchInstance::Card(_) => SketchKind::Card,
            SketchInstance::Freq(_) => SketchKind::Freq,
            SketchInstance::Rank(_) => SketchKind::Rank,
            SketchInstance::Memb(_) => SketchKind::Memb,
        }
    }

    pub fn insert(&mut self, value: &str) {
        match self {
            SketchInstance::Card(hll) => hll.insert(value),
            SketchInstance::Freq(cm) => cm.insert(value),
            SketchInstance::Rank(topk) => topk.insert(value),
            SketchInstance::Memb(bloom) => bloom.insert(value),
        }
    }

    /// Answer a query. CARD and RANK ignore the argument values.
    pub fn query(&self, values: &[String]) -> QueryResult {
        match self {
            SketchInstance::Card(hll) => QueryResult::Cardinality(hll.estimate()),
            SketchInstance::Freq(cm) => QueryResult::Frequencies(
                values
                    .iter()
                    .map(|v| (v.clone(), cm.estimate(v)))
                    .collect(),
            ),
            SketchInstance::Rank(topk) => QueryResult::Rankings(topk.ranked()),
            SketchInstance::Memb(bloom) => QueryResult::Memberships(
                values
                    .iter()
                    .map(|v| (v.clone(), bloom.contains(v)))
                    .collect(),
            ),
        }
    }

    /// Serialize to the self-describing wire format.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        let body = match self {
            SketchInstance::Card(hll) => bincode::serialize(hll),
            SketchInstance::Freq(cm) => bincode::serialize(cm),
            SketchInstance::Rank(topk) => bincode::serialize(topk),
            SketchInstance::Memb(bloom) => bincode::serialize(bloom),
        }
        .map_err(|e| {
            SkizzeError::Storage(std::io::Error::new(std::io::ErrorKind::Other, e))
        })?;

        let mut buf = Vec::with_capacity(HEADER_LEN + body.len());
        buf.push(self.kind().code());
        buf.push(FORMAT_VERSION);
        buf.extend_from_slice(&body);
        Ok(buf)
    }

    /// Deserialize a blob, verifying it carries the expected kind, a known
    /// version, and internally consistent parameters.
    pub fn from_bytes(expected: SketchKind, key: &str, bytes: &[u8]) -> Result<Self> {
        if bytes.len() < HEADER_LEN {
            return Err(SkizzeError::corrupt(key, "blob shorter than header"));
        }
        if bytes[0] != expected.code() {
            return Err(SkizzeError::corrupt(
                key,
                format!(
                    "kind tag {} does not match expected {}",
                    bytes[0],
                    expected.tag()
                ),
            ));
        }
        if bytes[1] != FORMAT_VERSION {
            return Err(SkizzeError::corrupt(
                key,
                format!("unsupported format version {}", bytes[1]),
            ));
        }

        let body = &bytes[HEADER_LEN..];
        let decode_err = |e: bincode::Error| SkizzeError::corrupt(key, e.to_string());
        let instance = match expected {
            SketchKind::Card => {
                SketchInstance::Card(bincode::deserialize(body).map_err(decode_err)?)
            }
            SketchKind::Freq => {
                SketchInstance::Freq(bincode::deserialize(body).map_err(decode_err)?)
            }
            SketchKind::Rank => {
                SketchInstance::Rank(bincode::deserialize(body).map_err(decode_err)?)
            }
            SketchKind::Memb => {
                SketchInstance::Memb(bincode::deserialize(body).map_err(decode_err)?)
            }
        };

        match &instance {
            SketchInstance::Card(hll) => hll.check(),
            SketchInstance::Freq(cm) => cm.check(),
            SketchInstance::Rank(topk) => topk.check(),
            SketchInstance::Memb(bloom) => bloom.check(),
        }
        .map_err(|reason| SkizzeError::corrupt(key, reason))?;

        Ok(instance)
    }
}
