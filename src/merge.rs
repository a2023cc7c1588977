use crate::geojson::{EffectiveProperties, FeatureProperties};

/**
Apply the line defaults of a video map to a feature's own properties.

Each field is resolved on its own: the feature's value is kept unless it is
zero/empty, in which case the default is used. A missing side counts as
all-zero properties.
 */
pub fn merge(
    own: Option<&FeatureProperties>,
    defaults: Option<&FeatureProperties>,
) -> EffectiveProperties {
    let empty = FeatureProperties::default();
    let own = own.unwrap_or(&empty);
    let defaults = defaults.unwrap_or(&empty);

    EffectiveProperties {
        bcg: if own.bcg != 0 { own.bcg } else { defaults.bcg },
        filters: if !own.filters.is_empty() {
            own.filters.clone()
        } else {
            defaults.filters.clone()
        },
        style: if !own.style.is_empty() {
            own.style.clone()
        } else {
            defaults.style.clone()
        },
        thickness: if own.thickness != 0 {
            own.thickness
        } else {
            defaults.thickness
        },
    }
}
