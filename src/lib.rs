//! Skizze: A Probabilistic Sketching Service
//!
//! Skizze maintains named probabilistic sketches over streams of string
//! values and answers approximate queries against them: distinct counts,
//! per-value frequencies, top-K rankings and set membership. Sketches of
//! all four kinds can be bundled under one name as a domain. State is
//! checkpointed to disk periodically so a restart loses nothing that was
//! saved.
//!
//! # Features
//!
//! - **Cardinality (`card`)**: HyperLogLog distinct counting
//! - **Frequency (`freq`)**: Count-Min per-value occurrence estimates
//! - **Rankings (`rank`)**: Space-Saving approximate top-K
//! - **Membership (`memb`)**: Bloom-filter set membership
//! - **Domains**: one sketch of each kind over a shared name
//! - **Checkpointing**: periodic and on-demand snapshots, atomic per key
//!
//! # Example
//!
//! ```no_run
//! use skizze::config::Config;
//! use skizze::datamodel::{Info, Properties, SketchKind};
//! use skizze::manager::Manager;
//!
//! let config = Config::default().normalized();
//! let manager = Manager::open(&config).unwrap();
//!
//! let mut properties = Properties::default();
//! properties.max_unique_items = Some(10_000);
//! manager
//!     .create_sketch(Info::new("users", SketchKind::Card, properties))
//!     .unwrap();
//!
//! manager
//!     .add_to_sketch("users.CARD", &["alice".to_string(), "bob".to_string()])
//!     .unwrap();
//! let distinct = manager.get_from_sketch("users.CARD", &[]).unwrap();
//! println!("distinct users: {:?}", distinct);
//! ```

pub mod api;
pub mod config;
pub mod datamodel;
pub mod error;
pub mod manager;
pub mod sketch;
pub mod storage;

// Re-export commonly used types
pub use config::Config;
pub use datamodel::{Info, Properties, QueryResult, SketchKind};
pub use error::{Result, SkizzeError};
pub use manager::Manager;
