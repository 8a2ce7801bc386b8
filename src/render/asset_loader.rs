//! Hintergrund-Thread zum Laden von Assets.
//!
//! Anfragen gehen über einen `mpsc`-Kanal an den Worker, Ergebnisse kommen
//! über einen zweiten Kanal zurück und werden einmal pro Tick übernommen.

use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;

use asteroid_raster::Texture;

use super::assets::{AssetCache, AssetSource};
use crate::shared::AssetKey;

type LoadResult = (AssetKey, Option<Texture>);

/// Ergebnis eines Anforderungs- oder Übernahmeschritts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssetBatch {
    /// In den Cache übernommene Einträge (geladen oder fehlgeschlagen)
    pub accepted: usize,
    /// Pixelgrößen neu geladener Icons (für Hit-Tests)
    pub icons: Vec<(String, [u32; 2])>,
}

impl AssetBatch {
    /// Gibt `true` zurück, wenn sich der Cache geändert hat.
    pub fn changed(&self) -> bool {
        self.accepted > 0
    }

    fn accept(&mut self, cache: &mut AssetCache, key: AssetKey, texture: Option<Texture>) {
        if let (AssetKey::Icon(name), Some(texture)) = (&key, &texture) {
            self.icons.push((name.clone(), [texture.width(), texture.height()]));
        }
        cache.insert(key, texture);
        self.accepted += 1;
    }
}

/// Asset-Loader mit eigenem Worker-Thread.
pub struct AssetLoader {
    source: AssetSource,
    requests: Option<Sender<Vec<AssetKey>>>,
    results: Option<Receiver<LoadResult>>,
    in_flight: usize,
}

impl AssetLoader {
    /// Startet den Worker für die gegebene Quelle.
    ///
    /// Schlägt das Starten fehl, lädt der Loader synchron beim Anfordern.
    pub fn spawn(source: AssetSource) -> Self {
        let (request_tx, request_rx) = mpsc::channel::<Vec<AssetKey>>();
        let (result_tx, result_rx) = mpsc::channel::<LoadResult>();

        let worker_source = source.clone();
        let spawned = thread::Builder::new()
            .name("asset_loader".to_string())
            .spawn(move || worker_loop(worker_source, request_rx, result_tx));

        match spawned {
            Ok(_) => Self {
                source,
                requests: Some(request_tx),
                results: Some(result_rx),
                in_flight: 0,
            },
            Err(e) => {
                log::warn!("Asset-Thread nicht gestartet, lade synchron: {}", e);
                Self::blocking(source)
            }
        }
    }

    /// Loader ohne Worker: `request` lädt sofort.
    pub fn blocking(source: AssetSource) -> Self {
        Self {
            source,
            requests: None,
            results: None,
            in_flight: 0,
        }
    }

    /// Fordert Assets an; bereits bekannte Schlüssel werden übersprungen.
    ///
    /// Ohne Worker werden die Assets direkt geladen und als Batch
    /// zurückgegeben, sonst kommen sie über `drain`.
    pub fn request(&mut self, cache: &mut AssetCache, keys: Vec<AssetKey>) -> AssetBatch {
        let mut batch = AssetBatch::default();
        let fresh = cache.mark_pending(keys);
        if fresh.is_empty() {
            return batch;
        }
        log::info!("{} Assets angefordert", fresh.len());

        let Some(tx) = &self.requests else {
            for key in fresh {
                let texture = self.source.load(&key);
                batch.accept(cache, key, texture);
            }
            return batch;
        };

        self.in_flight += fresh.len();
        if let Err(mpsc::SendError(keys)) = tx.send(fresh) {
            log::warn!("Asset-Thread beendet, {} Assets fallen zurück", keys.len());
            self.in_flight -= keys.len();
            for key in keys {
                batch.accept(cache, key, None);
            }
        }
        batch
    }

    /// Übernimmt alle fertigen Ergebnisse in den Cache.
    ///
    /// Zählt jeden übernommenen Eintrag, auch Texturen und Fehlschläge.
    pub fn drain(&mut self, cache: &mut AssetCache) -> AssetBatch {
        let mut batch = AssetBatch::default();
        let Some(results) = &self.results else {
            return batch;
        };
        while let Ok((key, texture)) = results.try_recv() {
            self.in_flight = self.in_flight.saturating_sub(1);
            batch.accept(cache, key, texture);
        }
        if batch.changed() {
            log::debug!("{} Assets übernommen, davon {} Icons", batch.accepted, batch.icons.len());
        }
        batch
    }

    /// Anzahl angeforderter, noch nicht übernommener Assets
    pub fn in_flight(&self) -> usize {
        self.in_flight
    }
}

fn worker_loop(source: AssetSource, requests: Receiver<Vec<AssetKey>>, results: Sender<LoadResult>) {
    while let Ok(batch) = requests.recv() {
        for key in batch {
            let texture = source.load(&key);
            if results.send((key, texture)).is_err() {
                return;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{Duration, Instant};

    fn write_icon(dir: &std::path::Path, name: &str) {
        std::fs::create_dir_all(dir.join("icons")).expect("mkdir");
        let image = image::RgbaImage::from_pixel(6, 3, image::Rgba([255, 0, 0, 255]));
        image.save(dir.join(format!("icons/{name}.png"))).expect("save");
    }

    #[test]
    fn worker_delivers_sizes_and_failures() {
        let dir = tempfile::tempdir().expect("tempdir");
        write_icon(dir.path(), "hot_steam");
        let mut loader = AssetLoader::spawn(AssetSource::Dir(dir.path().to_path_buf()));
        let mut cache = AssetCache::new();

        let immediate = loader.request(
            &mut cache,
            vec![AssetKey::icon("hot_steam"), AssetKey::icon("missing")],
        );
        assert!(!immediate.changed());

        let deadline = Instant::now() + Duration::from_secs(5);
        let mut icons = Vec::new();
        while loader.in_flight() > 0 && Instant::now() < deadline {
            icons.extend(loader.drain(&mut cache).icons);
            std::thread::sleep(Duration::from_millis(5));
        }

        assert_eq!(icons, vec![("hot_steam".to_string(), [6, 3])]);
        assert!(cache.icon("hot_steam").is_some());
        assert!(cache.icon("missing").is_none());
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn blocking_loader_answers_immediately() {
        let dir = tempfile::tempdir().expect("tempdir");
        write_icon(dir.path(), "ui_camera");
        let mut loader = AssetLoader::blocking(AssetSource::Dir(dir.path().to_path_buf()));
        let mut cache = AssetCache::new();

        let batch = loader.request(&mut cache, vec![AssetKey::icon("ui_camera")]);
        assert_eq!(batch.icons, vec![("ui_camera".to_string(), [6, 3])]);
        assert_eq!(batch.accepted, 1);
        assert_eq!(loader.in_flight(), 0);
    }

    #[test]
    fn textures_and_failures_count_as_changes() {
        let dir = tempfile::tempdir().expect("tempdir");
        std::fs::create_dir_all(dir.path().join("textures")).expect("mkdir");
        image::RgbaImage::from_pixel(4, 4, image::Rgba([0, 90, 200, 255]))
            .save(dir.path().join("textures/ocean.png"))
            .expect("save");
        let mut loader = AssetLoader::spawn(AssetSource::Dir(dir.path().to_path_buf()));
        let mut cache = AssetCache::new();

        loader.request(
            &mut cache,
            vec![AssetKey::texture("Ocean"), AssetKey::icon("missing")],
        );

        let deadline = Instant::now() + Duration::from_secs(5);
        let mut accepted = 0;
        let mut icons = Vec::new();
        while loader.in_flight() > 0 && Instant::now() < deadline {
            let batch = loader.drain(&mut cache);
            accepted += batch.accepted;
            icons.extend(batch.icons);
            std::thread::sleep(Duration::from_millis(5));
        }

        assert_eq!(accepted, 2);
        assert!(icons.is_empty());
        assert!(cache.biome_texture("Ocean").is_some());
    }
}
