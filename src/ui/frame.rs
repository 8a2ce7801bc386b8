//! Anzeige des komponierten Frames als egui-Textur.

use asteroid_raster::Canvas;

/// egui-Textur mit dem zuletzt komponierten Frame.
#[derive(Default)]
pub struct FrameTexture {
    handle: Option<egui::TextureHandle>,
}

impl FrameTexture {
    /// Erstellt eine leere Frame-Textur.
    pub fn new() -> Self {
        Self::default()
    }

    /// Lädt die Fläche hoch (ersetzt den vorherigen Frame).
    pub fn upload(&mut self, ctx: &egui::Context, canvas: &Canvas) {
        let size = [canvas.width() as usize, canvas.height() as usize];
        let image = egui::ColorImage::from_rgba_premultiplied(size, canvas.data());
        match &mut self.handle {
            Some(handle) => handle.set(image, egui::TextureOptions::NEAREST),
            None => {
                self.handle = Some(ctx.load_texture("asteroid_frame", image, egui::TextureOptions::NEAREST));
            }
        }
    }

    /// Zeichnet den letzten Frame in `rect` (nichts, solange keiner hochgeladen wurde).
    pub fn paint(&self, ui: &egui::Ui, rect: egui::Rect) {
        if let Some(handle) = &self.handle {
            ui.painter().image(
                handle.id(),
                rect,
                egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
                egui::Color32::WHITE,
            );
        }
    }

    /// Gibt `true` zurück, wenn bereits ein Frame hochgeladen wurde.
    pub fn has_frame(&self) -> bool {
        self.handle.is_some()
    }
}
