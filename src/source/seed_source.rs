//! Quellen für Seed-Bundle-Bytes.

use std::io::Read;
use std::path::PathBuf;
use std::time::Duration;

use super::SessionError;

/// Maximale Bundle-Größe.
const MAX_BUNDLE_BYTES: u64 = 64 * 1024 * 1024;
/// Zeitlimit für den gesamten Abruf.
const FETCH_TIMEOUT: Duration = Duration::from_secs(30);

/// Liefert die rohen Bundle-Bytes zu einer Seed-Koordinate.
pub trait SeedSource {
    /// Ruft das Bundle zu `coord` ab.
    fn fetch(&self, coord: &str) -> Result<Vec<u8>, SessionError>;
}

/// HTTP-Quelle: `GET <base>/coordinate/<coord>` mit `Accept: application/cbor`.
pub struct HttpSeedSource {
    base_url: String,
    agent: ureq::Agent,
}

impl HttpSeedSource {
    /// Erstellt eine Quelle für die Basis-URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        let agent: ureq::Agent = ureq::Agent::config_builder()
            .timeout_global(Some(FETCH_TIMEOUT))
            .build()
            .into();
        Self {
            base_url: base_url.into(),
            agent,
        }
    }

    /// Vollständige URL für eine Koordinate.
    pub fn url_for(&self, coord: &str) -> String {
        format!("{}/coordinate/{}", self.base_url.trim_end_matches('/'), coord)
    }
}

impl SeedSource for HttpSeedSource {
    fn fetch(&self, coord: &str) -> Result<Vec<u8>, SessionError> {
        let url = self.url_for(coord);
        log::info!("Lade Seed {} von {}", coord, url);

        let mut response = match self
            .agent
            .get(&url)
            .header("Accept", "application/cbor")
            .call()
        {
            Ok(response) => response,
            Err(ureq::Error::StatusCode(code)) => return Err(SessionError::HttpStatus(code)),
            Err(e) => return Err(SessionError::Fetch(e.to_string())),
        };

        let status = response.status().as_u16();
        if status != 200 {
            return Err(SessionError::HttpStatus(status));
        }

        response
            .body_mut()
            .with_config()
            .limit(MAX_BUNDLE_BYTES)
            .read_to_vec()
            .map_err(|e| SessionError::Fetch(e.to_string()))
    }
}

/// Lokale Datei als Quelle (`--bundle`). Die Koordinate wird ignoriert.
pub struct FileSeedSource {
    path: PathBuf,
}

impl FileSeedSource {
    /// Erstellt eine Quelle für die Datei.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl SeedSource for FileSeedSource {
    fn fetch(&self, coord: &str) -> Result<Vec<u8>, SessionError> {
        log::info!("Lade Bundle für {} aus {}", coord, self.path.display());
        let mut bytes = Vec::new();
        std::fs::File::open(&self.path)
            .and_then(|mut file| file.read_to_end(&mut bytes))
            .map_err(|e| SessionError::Fetch(format!("{}: {}", self.path.display(), e)))?;
        Ok(bytes)
    }
}
