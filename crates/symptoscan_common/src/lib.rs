//! SymptoScan Common - Shared types and lookup logic for SymptoScan
//!
//! Everything both the proxy daemon and the control CLI need: the symptom
//! normalizer, the fallback table, the resolver, remote response parsing and
//! the JSON shapes exchanged over `/api/symptoms`.

pub mod advisory;
pub mod config;
pub mod error;
pub mod fallback_table;
pub mod normalizer;
pub mod remote_format;
pub mod resolver;
pub mod types;

pub use advisory::{duration_advisory, DurationClass};
pub use config::ServerConfig;
pub use error::{ConfigError, RemoteError, SymptomError};
pub use fallback_table::FallbackTable;
pub use normalizer::{normalize, SymptomQuery};
pub use remote_format::{parse_remote_body, RemoteBody};
pub use resolver::Resolver;
pub use types::*;
