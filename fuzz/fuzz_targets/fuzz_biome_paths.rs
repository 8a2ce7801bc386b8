#![no_main]

use asteroid_map_viewer::core::{encode_biome_paths, parse_biome_paths};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    let regions = parse_biome_paths(text);
    for region in &regions {
        assert!(!region.polygons.is_empty());
        assert!(region.polygons.iter().all(|p| p.points.len() >= 3));
    }
    let reparsed = parse_biome_paths(&encode_biome_paths(&regions));
    assert_eq!(regions, reparsed);
});
