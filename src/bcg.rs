use log::warn;

use crate::geojson::EffectiveProperties;

/**
Pick the brightness/color group label of a filter.

# Arguments
- `filter` - index of the filter in the category's filter menu
- `bcg_menu` - the category's bcg labels, index-aligned with the filter menu
- `contributors` - merged properties of the features drawn by the filter, in
  aggregation order

# Returns
`bcg_menu[filter]` when it is set. Otherwise the label the first contributor
with a valid 1-based `bcg` points at. Otherwise an empty string.
 */
pub fn resolve_bcg(filter: usize, bcg_menu: &[String], contributors: &[EffectiveProperties]) -> String {
    if let Some(label) = bcg_menu.get(filter).filter(|label| !label.is_empty()) {
        return label.clone();
    }

    for props in contributors {
        if props.bcg == 0 {
            continue;
        }
        if props.bcg >= 1 && props.bcg as usize <= bcg_menu.len() {
            return bcg_menu[props.bcg as usize - 1].clone();
        }
        warn!(
            "bcg {} of filter {} is outside a menu of {} entries",
            props.bcg,
            filter,
            bcg_menu.len()
        );
    }
    String::new()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn menu(labels: &[&str]) -> Vec<String> {
        labels.iter().map(|l| l.to_string()).collect()
    }

    fn with_bcg(bcg: i64) -> EffectiveProperties {
        EffectiveProperties {
            bcg,
            ..Default::default()
        }
    }

    #[test]
    fn category_label_wins_over_features() {
        let bcg = resolve_bcg(0, &menu(&["A", "B"]), &[with_bcg(2)]);
        assert_eq!(bcg, "A");
    }

    #[test]
    fn feature_index_used_when_label_empty() {
        let bcg = resolve_bcg(0, &menu(&["", "B"]), &[with_bcg(2)]);
        assert_eq!(bcg, "B");
    }

    #[test]
    fn first_valid_feature_index_wins() {
        let contributors = [with_bcg(0), with_bcg(9), with_bcg(-1), with_bcg(3), with_bcg(2)];
        let bcg = resolve_bcg(1, &menu(&["X", "", "Z"]), &contributors);
        assert_eq!(bcg, "Z");
    }

    #[test]
    fn filter_past_menu_end_falls_back() {
        let bcg = resolve_bcg(5, &menu(&["A", "B"]), &[with_bcg(1)]);
        assert_eq!(bcg, "A");
    }

    #[test]
    fn nothing_resolves_to_empty() {
        assert_eq!(resolve_bcg(0, &[], &[with_bcg(1)]), "");
        assert_eq!(resolve_bcg(0, &menu(&[""]), &[with_bcg(0)]), "");
        assert_eq!(resolve_bcg(0, &menu(&["", "B"]), &[]), "");
    }
}
