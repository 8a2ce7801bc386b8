//! Namensregister: Anzeigenamen und Icon-Schlüssel für Biome, Geysire und POIs.
//!
//! Die Tabellen werden einmal beim ersten Zugriff aufgebaut und danach nur gelesen.
//! Unbekannte IDs bekommen einen aus der ID abgeleiteten Namen.

use std::collections::HashMap;
use std::sync::OnceLock;

const GEYSERS: &[(&str, &str)] = &[
    ("steam", "Cool Steam Vent"),
    ("hot_steam", "Steam Vent"),
    ("hot_water", "Water Geyser"),
    ("slush_water", "Cool Slush Geyser"),
    ("filthy_water", "Polluted Water Vent"),
    ("slush_salt_water", "Cool Salt Slush Geyser"),
    ("salt_water", "Salt Water Geyser"),
    ("small_volcano", "Minor Volcano"),
    ("big_volcano", "Volcano"),
    ("liquid_co2", "Carbon Dioxide Geyser"),
    ("hot_co2", "Carbon Dioxide Vent"),
    ("hot_hydrogen", "Hydrogen Vent"),
    ("hot_po2", "Hot Polluted Oxygen Vent"),
    ("slimy_po2", "Infectious Polluted Oxygen Vent"),
    ("chlorine_gas", "Chlorine Gas Vent"),
    ("chlorine_gas_cool", "Cool Chlorine Gas Vent"),
    ("methane", "Natural Gas Geyser"),
    ("molten_copper", "Copper Volcano"),
    ("molten_iron", "Iron Volcano"),
    ("molten_gold", "Gold Volcano"),
    ("molten_aluminum", "Aluminum Volcano"),
    ("molten_tungsten", "Tungsten Volcano"),
    ("molten_niobium", "Niobium Volcano"),
    ("molten_cobalt", "Cobalt Volcano"),
    ("oil_drip", "Leaky Oil Fissure"),
    ("liquid_sulfur", "Liquid Sulfur Geyser"),
    ("OilWell", "Oil Reservoir"),
];

const POIS: &[(&str, &str)] = &[
    ("Headquarters", "Printing Pod"),
    ("WarpConduitSender", "Supply Teleporter Input"),
    ("WarpConduitReceiver", "Supply Teleporter Output"),
    ("WarpPortal", "Teleporter Transmitter"),
    ("WarpReceiver", "Teleporter Receiver"),
    ("GravitasPedestal", "Ancient Pedestal"),
    ("MassiveHeatSink", "Anti Entropy Thermo-Nullifier"),
    ("GeneShuffler", "Neural Vacillator"),
    ("CryoTank", "Cryotank 3000"),
    ("SapTree", "Experiment 52B"),
    ("PropSurfaceSatellite1", "Crashed Satellite"),
    ("PropSurfaceSatellite2", "Wrecked Satellite"),
    ("PropSurfaceSatellite3", "Crushed Satellite"),
    ("TemporalTearOpener", "Temporal Tear Opener"),
    ("LonelyMinionHouse", "Hermit's Shack"),
];

const BIOMES: &[(&str, &str)] = &[
    ("Sandstone", "Sandstone"),
    ("Barren", "Barren"),
    ("Space", "Space"),
    ("FrozenWastes", "Frozen Wastes"),
    ("BoggyMarsh", "Boggy Marsh"),
    ("ToxicJungle", "Toxic Jungle"),
    ("Ocean", "Ocean"),
    ("Rust", "Rust"),
    ("Forest", "Forest"),
    ("Radioactive", "Radioactive"),
    ("Swamp", "Swamp"),
    ("Wasteland", "Wasteland"),
    ("Metallic", "Metallic"),
    ("Moo", "Moo"),
    ("IceCaves", "Ice Caves"),
    ("CarrotQuarry", "Carrot Quarry"),
    ("SugarWoods", "Sugar Woods"),
    ("OilField", "Oil Field"),
    ("MagmaCore", "Magma Core"),
    ("Aquatic", "Aquatic"),
];

/// Read-mostly Lookup-Tabellen.
pub struct NameRegistry {
    geysers: HashMap<&'static str, &'static str>,
    pois: HashMap<&'static str, &'static str>,
    biomes: HashMap<&'static str, &'static str>,
}

impl NameRegistry {
    fn build() -> Self {
        Self {
            geysers: GEYSERS.iter().copied().collect(),
            pois: POIS.iter().copied().collect(),
            biomes: BIOMES.iter().copied().collect(),
        }
    }

    /// Globale Instanz, beim ersten Zugriff aufgebaut.
    pub fn global() -> &'static NameRegistry {
        static REGISTRY: OnceLock<NameRegistry> = OnceLock::new();
        REGISTRY.get_or_init(Self::build)
    }

    /// Anzeigename eines Geysirs (ID mit oder ohne Namespace).
    pub fn geyser_name(&self, id: &str) -> String {
        let key = strip_namespace(id);
        self.geysers
            .get(key)
            .map_or_else(|| prettify(key), |name| name.to_string())
    }

    /// Anzeigename eines POIs.
    pub fn poi_name(&self, id: &str) -> String {
        let key = strip_namespace(id);
        self.pois
            .get(key)
            .map_or_else(|| prettify(key), |name| name.to_string())
    }

    /// Anzeigename eines Bioms.
    pub fn biome_name(&self, id: &str) -> String {
        let key = strip_namespace(id);
        self.biomes
            .get(key)
            .map_or_else(|| prettify(key), |name| name.to_string())
    }
}

/// Entfernt einen Namespace-Präfix (`a/b` → `b`, `ns::id` → `id`).
pub fn strip_namespace(id: &str) -> &str {
    let after_slash = id.rsplit('/').next().unwrap_or(id);
    after_slash.rsplit("::").next().unwrap_or(after_slash)
}

/// Icon-Schlüssel: ID ohne Namespace, klein geschrieben.
pub fn icon_key(id: &str) -> String {
    strip_namespace(id).to_ascii_lowercase()
}

/// Leitet einen lesbaren Namen ab: `hot_steam` → `Hot Steam`, `FrozenWastes` → `Frozen Wastes`.
pub fn prettify(key: &str) -> String {
    let mut out = String::with_capacity(key.len() + 4);
    let mut prev: Option<char> = None;
    for c in key.chars() {
        if c == '_' || c == '-' {
            if !out.is_empty() && !out.ends_with(' ') {
                out.push(' ');
            }
            prev = Some(' ');
            continue;
        }
        let word_start = match prev {
            None | Some(' ') => true,
            Some(p) => c.is_ascii_uppercase() && p.is_ascii_lowercase(),
        };
        if word_start {
            if !out.is_empty() && !out.ends_with(' ') {
                out.push(' ');
            }
            out.extend(c.to_uppercase());
        } else {
            out.push(c);
        }
        prev = Some(c);
    }
    out.trim_end().to_string()
}
