/*!
Turn the facility's map categories into the output groups.
 */
use log::{debug, info, warn};

use crate::{
    aggregate::{aggregate_filter, load_maps},
    bcg::resolve_bcg,
    error::Result,
    facility::{ArtccConfig, MapCategoryConfig},
    geojson::CoordinatePolicy,
    output::{ERAMMapEntry, ERAMMapGroup, ERAMMapGroups},
    source::GeometrySource,
};

/// Per category counters, for reporting only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CategoryStats {
    pub entries: usize,
    pub placeholders: usize,
    pub empty: usize,
    pub lines: usize,
}

/**
Build the entries of a single category, in filter menu order.

Placeholder filters (no label) and filters without any line produce no entry.
 */
pub fn build_category<S: GeometrySource + ?Sized>(
    category: &MapCategoryConfig,
    source: &S,
    policy: CoordinatePolicy,
) -> Result<(ERAMMapGroup, CategoryStats)> {
    let maps = load_maps(&category.video_map_ids, source)?;
    let mut group = ERAMMapGroup::new();
    let mut stats = CategoryStats::default();

    for (index, filter) in category.filter_menu.iter().enumerate() {
        if filter.is_placeholder() {
            debug!("{}: filter {} has no label, skipped", category.name, index);
            stats.placeholders += 1;
            continue;
        }

        let aggregated = aggregate_filter(&maps, index, policy)?;
        if aggregated.lines.is_empty() {
            debug!(
                "{}: filter {} ({} {}) has no lines, skipped",
                category.name, index, filter.label_line1, filter.label_line2
            );
            stats.empty += 1;
            continue;
        }

        stats.entries += 1;
        stats.lines += aggregated.lines.len();
        group.push(ERAMMapEntry {
            bcg_name: resolve_bcg(index, &category.bcg_menu, &aggregated.properties),
            label_line1: filter.label_line1.clone(),
            label_line2: filter.label_line2.clone(),
            name: category.name.clone(),
            lines: aggregated.lines,
        });
    }
    Ok((group, stats))
}

/// Build every category of the facility. Stops at the first error.
pub fn build_groups<S: GeometrySource + ?Sized>(
    config: &ArtccConfig,
    source: &S,
    policy: CoordinatePolicy,
) -> Result<ERAMMapGroups> {
    let mut groups = ERAMMapGroups::new();
    for category in config.geo_maps() {
        let (group, stats) = build_category(category, source, policy)?;
        info!(
            "{}: {} entries, {} lines ({} unlabeled, {} empty filters skipped)",
            category.name, stats.entries, stats.lines, stats.placeholders, stats.empty
        );
        if groups.insert(category.name.clone(), group).is_some() {
            warn!("Map category {} is defined more than once, keeping the last one", category.name);
        }
    }
    Ok(groups)
}
