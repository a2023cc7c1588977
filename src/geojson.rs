/*!
This module contains the struct definition for the video map GeoJSON files.
They are used to deserialize the GeoJSON file into a Rust struct.

Coordinates are kept as raw JSON until a feature is known to be a line we
want, since points and polygons share the same field with another shape.
 */
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::error::{Error, Result};

pub const FEATURE: &str = "Feature";
pub const FEATURE_COLLECTION: &str = "FeatureCollection";
pub const LINE_STRING: &str = "LineString";

/// Longitude, latitude
pub type Point2LL = [f32; 2];
pub type LineString = Vec<Point2LL>;

/// Explicit `null` decodes like an absent field.
fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// What to do with a LineString whose coordinates can't be decoded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CoordinatePolicy {
    /// Treat the line as empty and keep going
    #[default]
    Lenient,
    /// Abort the run
    Strict,
}

/// A null or missing geometry decodes with an empty type, so it is never a line.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Geometry {
    #[serde(rename = "type", default, deserialize_with = "null_as_default")]
    pub typ: String,
    #[serde(default)]
    pub coordinates: Value,
}

impl Geometry {
    pub fn is_line_string(&self) -> bool {
        self.typ == LINE_STRING
    }

    /**
    Decode the coordinates as a line.

    # Returns
    The points of the line, or the decoding error. Callers decide through a
    `CoordinatePolicy` whether the error matters.
     */
    pub fn line(&self) -> std::result::Result<LineString, serde_json::Error> {
        // Positions may carry an altitude after lon/lat, only the first two are kept.
        Vec::<Vec<f32>>::deserialize(&self.coordinates)?
            .into_iter()
            .map(|position| match position.as_slice() {
                [lon, lat, ..] => Ok([*lon, *lat]),
                _ => Err(<serde_json::Error as serde::de::Error>::invalid_length(
                    position.len(),
                    &"a position of at least 2 numbers",
                )),
            })
            .collect()
    }
}

/// Style and membership fields of a feature. Absent fields are zero/empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FeatureProperties {
    #[serde(deserialize_with = "null_as_default")]
    pub is_line_defaults: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub is_text_defaults: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub is_symbol_defaults: bool,
    /// 1-based index into the category's bcg menu, 0 when unset
    #[serde(deserialize_with = "null_as_default")]
    pub bcg: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub filters: Vec<i64>,
    #[serde(deserialize_with = "null_as_default")]
    pub style: String,
    #[serde(deserialize_with = "null_as_default")]
    pub thickness: i64,
}

impl FeatureProperties {
    /// Marker features carry defaults for the file and are never drawn.
    pub fn is_defaults(&self) -> bool {
        self.is_line_defaults || self.is_text_defaults || self.is_symbol_defaults
    }
}

/// Properties of a drawable feature once the file's line defaults are applied.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EffectiveProperties {
    pub bcg: i64,
    pub filters: Vec<i64>,
    pub style: String,
    pub thickness: i64,
}

impl EffectiveProperties {
    pub fn has_filter(&self, filter: usize) -> bool {
        self.filters.iter().any(|&f| f >= 0 && f as usize == filter)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawFeature {
    #[serde(rename = "type")]
    pub typ: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub geometry: Geometry,
    #[serde(default)]
    pub properties: Option<FeatureProperties>,
}

impl RawFeature {
    pub fn is_feature(&self) -> bool {
        self.typ == FEATURE
    }

    pub fn is_defaults(&self) -> bool {
        self.properties.as_ref().map_or(false, FeatureProperties::is_defaults)
    }

    /**
    Line coordinates of the feature under the given policy.

    # Arguments
    - `map_id` - video map the feature comes from, for error reporting
    - `index` - position of the feature in its file
    - `policy` - what to do when the coordinates aren't a line
     */
    pub fn line_coordinates(
        &self,
        map_id: &str,
        index: usize,
        policy: CoordinatePolicy,
    ) -> Result<LineString> {
        match self.geometry.line() {
            Ok(line) => Ok(line),
            Err(source) => match policy {
                CoordinatePolicy::Lenient => {
                    log::warn!(
                        "Video map {} feature #{} has invalid line coordinates, keeping an empty line : {}",
                        map_id,
                        index,
                        source
                    );
                    Ok(Vec::new())
                }
                CoordinatePolicy::Strict => Err(Error::Coordinates {
                    map_id: map_id.to_string(),
                    feature: index,
                    source,
                }),
            },
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct FeatureCollection {
    #[serde(rename = "type", default)]
    pub typ: String,
    #[serde(default)]
    pub features: Vec<RawFeature>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn feature(value: Value) -> RawFeature {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn missing_and_null_properties_decode_to_none() {
        let missing = feature(json!({
            "type": "Feature",
            "geometry": { "type": "LineString", "coordinates": [[0.0, 0.0], [1.0, 1.0]] }
        }));
        let null = feature(json!({
            "type": "Feature",
            "geometry": { "type": "LineString", "coordinates": [] },
            "properties": null
        }));
        assert!(missing.properties.is_none());
        assert!(null.properties.is_none());
        assert!(!missing.is_defaults());
    }

    #[test]
    fn partial_properties_default_the_rest() {
        let f = feature(json!({
            "type": "Feature",
            "geometry": { "type": "Point", "coordinates": [1.0, 2.0] },
            "properties": { "isTextDefaults": true, "bcg": 3, "unknown": "ignored" }
        }));
        let props = f.properties.unwrap();
        assert!(props.is_text_defaults);
        assert!(props.is_defaults());
        assert_eq!(props.bcg, 3);
        assert!(props.filters.is_empty());
        assert_eq!(props.style, "");
        assert_eq!(props.thickness, 0);
    }

    #[test]
    fn line_coordinates_decode() {
        let f = feature(json!({
            "type": "Feature",
            "geometry": { "type": "LineString", "coordinates": [[-73.5, 40.25], [-73.75, 40.5]] }
        }));
        assert!(f.geometry.is_line_string());
        let line = f.line_coordinates("m1", 0, CoordinatePolicy::Strict).unwrap();
        assert_eq!(line, vec![[-73.5, 40.25], [-73.75, 40.5]]);
    }

    #[test]
    fn bad_coordinates_follow_policy() {
        let f = feature(json!({
            "type": "Feature",
            "geometry": { "type": "LineString", "coordinates": [[[0.0, 0.0]]] }
        }));
        let lenient = f.line_coordinates("m1", 4, CoordinatePolicy::Lenient).unwrap();
        assert!(lenient.is_empty());

        match f.line_coordinates("m1", 4, CoordinatePolicy::Strict) {
            Err(Error::Coordinates { map_id, feature, .. }) => {
                assert_eq!(map_id, "m1");
                assert_eq!(feature, 4);
            }
            other => panic!("expected a coordinates error, got {:?}", other),
        }
    }

    #[test]
    fn null_or_missing_geometry_is_not_a_line() {
        let collection: FeatureCollection = serde_json::from_value(json!({
            "type": "FeatureCollection",
            "features": [
                { "type": "Feature", "geometry": null, "properties": { "isTextDefaults": true } },
                { "type": "Feature", "properties": { "filters": [0] } }
            ]
        }))
        .unwrap();
        assert_eq!(collection.features.len(), 2);
        assert!(collection.features.iter().all(|f| !f.geometry.is_line_string()));
        assert!(collection.features[0].is_defaults());
    }

    #[test]
    fn null_property_fields_default() {
        let f = feature(json!({
            "type": "Feature",
            "geometry": { "type": "LineString", "coordinates": [] },
            "properties": {
                "isLineDefaults": null, "bcg": null, "filters": null, "style": null, "thickness": null
            }
        }));
        assert_eq!(f.properties, Some(FeatureProperties::default()));
    }

    #[test]
    fn altitude_is_dropped_from_positions() {
        let f = feature(json!({
            "type": "Feature",
            "geometry": { "type": "LineString", "coordinates": [[-74.0, 40.5, 0.0], [-73.5, 41.0, 1200.0]] }
        }));
        let line = f.line_coordinates("m1", 0, CoordinatePolicy::Strict).unwrap();
        assert_eq!(line, vec![[-74.0, 40.5], [-73.5, 41.0]]);
    }

    #[test]
    fn short_or_non_numeric_positions_are_invalid() {
        for coordinates in [json!([[1.0]]), json!([[1.0, "north"]]), json!([[]])] {
            let f = feature(json!({
                "type": "Feature",
                "geometry": { "type": "LineString", "coordinates": coordinates }
            }));
            assert!(matches!(
                f.line_coordinates("m1", 2, CoordinatePolicy::Strict),
                Err(Error::Coordinates { feature: 2, .. })
            ));
        }
    }

    #[test]
    fn has_filter_ignores_negative_indices() {
        let props = EffectiveProperties {
            filters: vec![-1, 2],
            ..Default::default()
        };
        assert!(props.has_filter(2));
        assert!(!props.has_filter(1));
        assert!(!props.has_filter(usize::MAX));
    }
}
