//! # stubgen Corpus
//!
//! Benchmark fixture generation.
//!
//! Fixtures are small IDL declarations rendered from typed option records.
//! Each configured instance can be denied for specific bindings, so the
//! corpus generated for one binding omits what that binding cannot build.

pub mod config;
pub mod error;
pub mod fixtures;
pub mod registry;

pub use config::{Binding, Config, ConfigValue, Definition};
pub use error::CorpusError;
pub use registry::{FixtureFile, GeneratedFile, Registry};
