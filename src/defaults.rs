use log::warn;

use crate::geojson::{FeatureCollection, FeatureProperties};

/**
Find the line defaults of a video map.

# Returns
The properties of the feature flagged `isLineDefaults`, if any. When a file
flags more than one, the last one in file order wins.
 */
pub fn line_defaults(collection: &FeatureCollection) -> Option<FeatureProperties> {
    let mut found = collection
        .features
        .iter()
        .filter_map(|feature| feature.properties.as_ref())
        .filter(|props| props.is_line_defaults);

    let first = found.next()?;
    let (count, last) = found.fold((1, first), |(count, _), props| (count + 1, props));
    if count > 1 {
        warn!("{} line defaults features in one video map, using the last one", count);
    }
    Some(last.clone())
}
