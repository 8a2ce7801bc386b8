//! Dekodierung eines Seed-Bundles aus CBOR oder JSON.

use super::SessionError;
use crate::core::SeedBundle;

/// Dekodiert ein Bundle. JSON, wenn der Inhalt mit `{` beginnt, sonst CBOR.
pub fn decode_bundle(bytes: &[u8]) -> Result<SeedBundle, SessionError> {
    let first = bytes.iter().find(|b| !b.is_ascii_whitespace());
    let bundle: SeedBundle = if first == Some(&b'{') {
        serde_json::from_slice(bytes).map_err(|e| SessionError::Decode(e.to_string()))?
    } else {
        ciborium::de::from_reader(bytes).map_err(|e| SessionError::Decode(e.to_string()))?
    };
    log::debug!("Bundle dekodiert: {} Asteroiden", bundle.asteroids.len());
    Ok(bundle)
}
