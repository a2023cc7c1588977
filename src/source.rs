/*!
Where video maps come from.

The extraction only asks for a map by id; `VideoMapDir` reads them from the
`VideoMaps/<facility>/` folder, tests hand over decoded collections directly.
 */
use std::{
    collections::HashMap,
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
};

use log::{debug, warn};

use crate::{
    error::{Error, Result},
    geojson::{FeatureCollection, FEATURE_COLLECTION},
};

pub const ARTCC_DIR: &str = "ARTCCs";
pub const VIDEO_MAP_DIR: &str = "VideoMaps";
pub const VIDEO_MAP_EXT: &str = "geojson";

pub trait GeometrySource {
    fn load(&self, video_map_id: &str) -> Result<FeatureCollection>;
}

/// Configuration file of a facility under `root`
pub fn config_path(root: &Path, facility: &str) -> PathBuf {
    root.join(ARTCC_DIR).join(format!("{}.json", facility))
}

#[derive(Debug, Clone)]
pub struct VideoMapDir {
    dir: PathBuf,
}

impl VideoMapDir {
    pub fn new(root: &Path, facility: &str) -> Self {
        Self {
            dir: root.join(VIDEO_MAP_DIR).join(facility),
        }
    }

    pub fn path_of(&self, video_map_id: &str) -> PathBuf {
        self.dir.join(format!("{}.{}", video_map_id, VIDEO_MAP_EXT))
    }
}

impl GeometrySource for VideoMapDir {
    fn load(&self, video_map_id: &str) -> Result<FeatureCollection> {
        let path = self.path_of(video_map_id);
        // The handle is dropped as soon as decoding returns, whatever the outcome.
        let collection: FeatureCollection = {
            let file = File::open(&path).map_err(|source| Error::VideoMapRead {
                id: video_map_id.to_string(),
                path: path.clone(),
                source,
            })?;
            serde_json::from_reader(BufReader::new(file)).map_err(|source| {
                Error::VideoMapParse {
                    id: video_map_id.to_string(),
                    path: path.clone(),
                    source,
                }
            })?
        };

        if collection.typ != FEATURE_COLLECTION {
            warn!(
                "Video map {} has type {:?}, expected {}",
                video_map_id, collection.typ, FEATURE_COLLECTION
            );
        }
        debug!(
            "Loaded video map {} ({} features) from {:?}",
            video_map_id,
            collection.features.len(),
            path
        );
        Ok(collection)
    }
}

impl GeometrySource for HashMap<String, FeatureCollection> {
    fn load(&self, video_map_id: &str) -> Result<FeatureCollection> {
        self.get(video_map_id)
            .cloned()
            .ok_or_else(|| Error::VideoMapMissing {
                id: video_map_id.to_string(),
            })
    }
}
