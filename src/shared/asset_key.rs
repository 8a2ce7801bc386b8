//! Schlüssel für Icons und Biom-Texturen.

/// Icon der Screenshot-Schaltfläche
pub const UI_CAMERA_ICON: &str = "ui_camera";
/// Icon der Options-Schaltfläche
pub const UI_OPTIONS_ICON: &str = "ui_options";
/// Icon der Asteroiden-Schaltfläche
pub const UI_ASTEROID_ICON: &str = "ui_asteroid";
/// Icon der Feature-Listen-Schaltfläche
pub const UI_LIST_ICON: &str = "ui_list";

/// Die vier festen Tray-Icons in Anzeigereihenfolge.
pub const UI_ICONS: [&str; 4] = [
    UI_CAMERA_ICON,
    UI_OPTIONS_ICON,
    UI_ASTEROID_ICON,
    UI_LIST_ICON,
];

/// Textur-Schlüssel des Weltraum-Pseudo-Bioms.
pub const SPACE_TEXTURE: &str = "space";

/// Adresse eines Assets im Cache.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum AssetKey {
    /// Icon (`icons/<key>.png` oder `.svg`)
    Icon(String),
    /// Biom-Textur (`textures/<key>.png`)
    Texture(String),
}

impl AssetKey {
    /// Icon-Schlüssel
    pub fn icon(key: impl Into<String>) -> Self {
        Self::Icon(key.into())
    }

    /// Textur-Schlüssel (Biom-Name klein geschrieben)
    pub fn texture(biome: &str) -> Self {
        Self::Texture(biome.to_ascii_lowercase())
    }

    /// Reiner Name ohne Art
    pub fn name(&self) -> &str {
        match self {
            Self::Icon(name) | Self::Texture(name) => name,
        }
    }

    /// Relative Pfade, unter denen das Asset gesucht wird (in dieser Reihenfolge).
    pub fn candidate_paths(&self) -> Vec<String> {
        match self {
            Self::Icon(name) => vec![format!("icons/{name}.png"), format!("icons/{name}.svg")],
            Self::Texture(name) => vec![format!("textures/{name}.png")],
        }
    }
}

impl std::fmt::Display for AssetKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Icon(name) => write!(f, "icon:{name}"),
            Self::Texture(name) => write!(f, "texture:{name}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn icons_try_png_before_svg() {
        assert_eq!(
            AssetKey::icon("hot_steam").candidate_paths(),
            vec!["icons/hot_steam.png", "icons/hot_steam.svg"]
        );
        assert_eq!(
            AssetKey::texture("Sandstone").candidate_paths(),
            vec!["textures/sandstone.png"]
        );
    }
}
