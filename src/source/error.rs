//! Fehler beim Laden einer Sitzung.

/// Fehlerarten des Ladevorgangs. Alle landen als Statustext in der UI.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// Netzwerk- oder Dateifehler
    #[error("Fetch failed: {0}")]
    Fetch(String),
    /// Server antwortete nicht mit 200
    #[error("Server returned HTTP {0}")]
    HttpStatus(u16),
    /// Bundle nicht lesbar
    #[error("Could not decode seed bundle: {0}")]
    Decode(String),
    /// Angeforderter Asteroid fehlt im Bundle
    #[error("Asteroid '{requested}' not found. Available:\n{listing}")]
    AsteroidNotFound {
        /// Angeforderte ID
        requested: String,
        /// Verfügbare IDs, drei pro Zeile
        listing: String,
    },
    /// Bundle enthält keinen Asteroiden
    #[error("Seed bundle contains no asteroids")]
    EmptyBundle,
    /// Aktion braucht eine Seed-Quelle, es ist aber keine konfiguriert
    #[error("No seed source configured")]
    NoSource,
}
