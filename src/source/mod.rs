//! Seed-Quelle: Abruf eines Seed-Bundles, Dekodierung und Location-Parsing.

mod decode;
mod error;
mod location;
mod seed_source;

pub use decode::decode_bundle;
pub use error::SessionError;
pub use location::Location;
pub use seed_source::{FileSeedSource, HttpSeedSource, SeedSource};
