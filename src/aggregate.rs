/*!
Collect the lines of one filter across the video maps of a category.
 */
use log::debug;

use crate::{
    defaults::line_defaults,
    error::Result,
    geojson::{CoordinatePolicy, EffectiveProperties, FeatureCollection, FeatureProperties, LineString},
    merge::merge,
    source::GeometrySource,
};

/// A decoded video map with its line defaults already resolved.
#[derive(Debug, Clone)]
pub struct LoadedMap {
    pub id: String,
    pub collection: FeatureCollection,
    pub line_defaults: Option<FeatureProperties>,
}

impl LoadedMap {
    pub fn new(id: impl Into<String>, collection: FeatureCollection) -> Self {
        let line_defaults = line_defaults(&collection);
        Self {
            id: id.into(),
            collection,
            line_defaults,
        }
    }
}

/**
Load every video map of a category, in the listed order.

# Returns
The decoded maps, or the first loading error. A single missing or malformed
map fails the whole category.
 */
pub fn load_maps<S: GeometrySource + ?Sized>(video_map_ids: &[String], source: &S) -> Result<Vec<LoadedMap>> {
    video_map_ids
        .iter()
        .map(|id| -> Result<LoadedMap> {
            let map = LoadedMap::new(id.as_str(), source.load(id)?);
            debug!(
                "Video map {}: {} features, line defaults {}",
                map.id,
                map.collection.features.len(),
                if map.line_defaults.is_some() { "present" } else { "absent" }
            );
            Ok(map)
        })
        .collect()
}

/// Lines of a filter, with the merged properties of each contributing feature.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterLines {
    pub lines: Vec<LineString>,
    pub properties: Vec<EffectiveProperties>,
}

/**
Gather the lines belonging to filter `filter`.

Maps are visited in order, then features in file order. A feature contributes
when it is a `Feature`, is not a defaults marker, is a `LineString` and its
effective filters contain `filter`.
 */
pub fn aggregate_filter(maps: &[LoadedMap], filter: usize, policy: CoordinatePolicy) -> Result<FilterLines> {
    let mut out = FilterLines::default();
    for map in maps {
        for (index, feature) in map.collection.features.iter().enumerate() {
            if !feature.is_feature() || feature.is_defaults() || !feature.geometry.is_line_string() {
                continue;
            }
            let effective = merge(feature.properties.as_ref(), map.line_defaults.as_ref());
            if !effective.has_filter(filter) {
                continue;
            }
            out.lines.push(feature.line_coordinates(&map.id, index, policy)?);
            out.properties.push(effective);
        }
    }
    Ok(out)
}
