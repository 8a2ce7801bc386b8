//! 2D-Kamera für Pan und Zoom über der Asteroiden-Karte.
//!
//! Welt-Punkt `p` landet auf dem Bildschirm bei `p * WORLD_SCALE * zoom + offset`.
//! Asteroiden-Pixel werden standardmäßig doppelt so groß dargestellt.

use glam::Vec2;

/// Feste Welt-Pixel-Skalierung (ein Asteroiden-Pixel = 2 Bildschirm-Pixel bei Zoom 1).
pub const WORLD_SCALE: f32 = 2.0;
/// Obergrenze für den Zoom.
pub const MAX_ZOOM: f32 = 16.0;
/// Anteil des Fit-Zooms, bis zu dem herausgezoomt werden darf.
pub const MIN_ZOOM_FRACTION: f32 = 0.25;

/// 2D-Kamera mit Pan, Zoom und Pan-Begrenzung
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera2D {
    /// Bildschirm-Offset des Welt-Ursprungs (camX, camY)
    pub offset: Vec2,
    /// Zoom-Level (1.0 = 2 Bildschirm-Pixel pro Welt-Pixel)
    pub zoom: f32,
    /// Untere Zoom-Grenze, abhängig von Fenster- und Asteroidengröße
    pub min_zoom: f32,
    /// Obere Zoom-Grenze
    pub max_zoom: f32,
}

impl Default for Camera2D {
    fn default() -> Self {
        Self::new()
    }
}

impl Camera2D {
    /// Erstellt eine Kamera im Ursprung mit Zoom 1.0.
    pub fn new() -> Self {
        Self {
            offset: Vec2::ZERO,
            zoom: 1.0,
            min_zoom: 0.01,
            max_zoom: MAX_ZOOM,
        }
    }

    /// Kamera mit abweichender Zoom-Obergrenze (aus den Optionen).
    pub fn with_max_zoom(max_zoom: f32) -> Self {
        Self {
            max_zoom: max_zoom.max(0.01),
            ..Self::new()
        }
    }

    /// Bildschirm-Pixel pro Welt-Einheit.
    pub fn pixels_per_unit(&self) -> f32 {
        WORLD_SCALE * self.zoom
    }

    /// Welt → Bildschirm
    pub fn world_to_screen(&self, world: Vec2) -> Vec2 {
        world * self.pixels_per_unit() + self.offset
    }

    /// Bildschirm → Welt
    pub fn screen_to_world(&self, screen: Vec2) -> Vec2 {
        (screen - self.offset) / self.pixels_per_unit()
    }

    /// Zoom, bei dem der Asteroid das Fenster maximal ausfüllt.
    pub fn fit_zoom(viewport: Vec2, world_size: Vec2) -> Option<f32> {
        if world_size.x <= 0.0 || world_size.y <= 0.0 || viewport.x <= 0.0 || viewport.y <= 0.0 {
            return None;
        }
        Some((viewport.x / (world_size.x * WORLD_SCALE)).min(viewport.y / (world_size.y * WORLD_SCALE)))
    }

    /// Berechnet `min_zoom` neu (ein Viertel des Fit-Zooms).
    pub fn update_min_zoom(&mut self, viewport: Vec2, world_size: Vec2) {
        if let Some(fit) = Self::fit_zoom(viewport, world_size) {
            self.min_zoom = (fit * MIN_ZOOM_FRACTION).min(self.max_zoom);
        }
    }

    /// Erzwingt Zoom- und Pan-Grenzen.
    ///
    /// `offset.x ∈ [W/2 − sizeX·2·zoom, W/2]`, analog für Y: die Asteroidenmitte
    /// bleibt immer erreichbar.
    pub fn clamp(&mut self, viewport: Vec2, world_size: Vec2) {
        self.zoom = self.zoom.clamp(self.min_zoom, self.max_zoom);
        if world_size.x <= 0.0 || world_size.y <= 0.0 {
            return;
        }
        let half = viewport * 0.5;
        let extent = world_size * self.pixels_per_unit();
        self.offset.x = self.offset.x.clamp(half.x - extent.x, half.x);
        self.offset.y = self.offset.y.clamp(half.y - extent.y, half.y);
    }

    /// Zeigt den gesamten Asteroiden zentriert und maximal groß.
    pub fn fit(&mut self, viewport: Vec2, world_size: Vec2) {
        let Some(fit) = Self::fit_zoom(viewport, world_size) else {
            return;
        };
        self.zoom = fit.min(self.max_zoom);
        self.offset = (viewport - world_size * self.pixels_per_unit()) * 0.5;
        self.update_min_zoom(viewport, world_size);
        self.clamp(viewport, world_size);
    }

    /// Zoomt um `factor`, der Welt-Punkt unter `screen` bleibt dabei stehen.
    pub fn zoom_about(&mut self, screen: Vec2, factor: f32, viewport: Vec2, world_size: Vec2) {
        if !factor.is_finite() || factor <= 0.0 {
            return;
        }
        let anchor = self.screen_to_world(screen);
        self.zoom = (self.zoom * factor).clamp(self.min_zoom, self.max_zoom);
        self.offset = screen - anchor * self.pixels_per_unit();
        self.clamp(viewport, world_size);
    }

    /// Verschiebt die Ansicht um ein Bildschirm-Delta.
    pub fn pan(&mut self, delta: Vec2, viewport: Vec2, world_size: Vec2) {
        self.offset += delta;
        self.clamp(viewport, world_size);
    }

    /// Verschiebt die Ansicht so, dass `screen` in die Fenstermitte rückt.
    pub fn center_on(&mut self, screen: Vec2, viewport: Vec2, world_size: Vec2) {
        self.offset += viewport * 0.5 - screen;
        self.clamp(viewport, world_size);
    }

    /// Fenstergröße geändert: der Welt-Punkt in der Fenstermitte bleibt in der Mitte.
    pub fn resize(&mut self, old_viewport: Vec2, new_viewport: Vec2, world_size: Vec2) {
        if old_viewport.x <= 0.0 || old_viewport.y <= 0.0 {
            self.update_min_zoom(new_viewport, world_size);
            self.clamp(new_viewport, world_size);
            return;
        }
        let center = self.screen_to_world(old_viewport * 0.5);
        self.update_min_zoom(new_viewport, world_size);
        self.zoom = self.zoom.clamp(self.min_zoom, self.max_zoom);
        self.offset = new_viewport * 0.5 - center * self.pixels_per_unit();
        self.clamp(new_viewport, world_size);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const VIEWPORT: Vec2 = Vec2::new(640.0, 480.0);
    const WORLD: Vec2 = Vec2::new(100.0, 50.0);

    #[test]
    fn fit_centers_and_sets_min_zoom() {
        let mut camera = Camera2D::new();
        camera.fit(VIEWPORT, WORLD);

        assert_relative_eq!(camera.zoom, 3.2);
        assert_relative_eq!(camera.offset.x, 0.0, epsilon = 1e-4);
        assert_relative_eq!(camera.offset.y, 80.0, epsilon = 1e-4);
        assert_relative_eq!(camera.min_zoom, 0.8, epsilon = 1e-6);
    }

    #[test]
    fn world_screen_roundtrip() {
        let mut camera = Camera2D::new();
        camera.offset = Vec2::new(-37.0, 12.5);
        camera.zoom = 2.75;

        for (x, y) in [(0.0, 0.0), (99.0, 49.0), (17.0, 33.0)] {
            let world = Vec2::new(x, y);
            let back = camera.screen_to_world(camera.world_to_screen(world));
            assert_relative_eq!(back.x, world.x, epsilon = 1e-3);
            assert_relative_eq!(back.y, world.y, epsilon = 1e-3);
        }
    }

    #[test]
    fn zoom_about_keeps_anchor_fixed() {
        let mut camera = Camera2D::new();
        camera.fit(VIEWPORT, WORLD);
        let anchor_screen = Vec2::new(200.0, 150.0);
        let before = camera.screen_to_world(anchor_screen);

        camera.zoom_about(anchor_screen, 1.5, VIEWPORT, WORLD);

        let after = camera.screen_to_world(anchor_screen);
        assert!((after - before).length() < 1.0);
        assert_relative_eq!(camera.zoom, 4.8, epsilon = 1e-4);
    }

    #[test]
    fn zoom_is_clamped_to_bounds() {
        let mut camera = Camera2D::new();
        camera.fit(VIEWPORT, WORLD);

        camera.zoom_about(Vec2::ZERO, 1000.0, VIEWPORT, WORLD);
        assert_relative_eq!(camera.zoom, MAX_ZOOM);

        camera.zoom_about(Vec2::ZERO, 1e-6, VIEWPORT, WORLD);
        assert_relative_eq!(camera.zoom, camera.min_zoom);
    }

    #[test]
    fn pan_is_clamped_so_center_stays_reachable() {
        let mut camera = Camera2D::new();
        camera.fit(VIEWPORT, WORLD);

        camera.pan(Vec2::new(10_000.0, -10_000.0), VIEWPORT, WORLD);

        assert_relative_eq!(camera.offset.x, 320.0);
        assert_relative_eq!(camera.offset.y, 240.0 - 50.0 * 2.0 * 3.2, epsilon = 1e-3);
    }

    #[test]
    fn resize_pins_center_world_point() {
        let mut camera = Camera2D::new();
        camera.fit(VIEWPORT, WORLD);
        camera.zoom_about(Vec2::new(320.0, 240.0), 2.0, VIEWPORT, WORLD);
        let center_before = camera.screen_to_world(VIEWPORT * 0.5);

        let new_viewport = Vec2::new(800.0, 600.0);
        camera.resize(VIEWPORT, new_viewport, WORLD);

        let center_after = camera.screen_to_world(new_viewport * 0.5);
        assert!((center_after - center_before).length() < 1e-3);
    }

    #[test]
    fn center_on_moves_point_to_viewport_center() {
        let mut camera = Camera2D::new();
        camera.fit(VIEWPORT, WORLD);
        camera.zoom_about(VIEWPORT * 0.5, 2.0, VIEWPORT, WORLD);
        let target = camera.world_to_screen(Vec2::new(40.0, 20.0));

        camera.center_on(target, VIEWPORT, WORLD);

        let moved = camera.world_to_screen(Vec2::new(40.0, 20.0));
        assert_relative_eq!(moved.x, 320.0, epsilon = 1e-3);
        assert_relative_eq!(moved.y, 240.0, epsilon = 1e-3);
    }
}
