/*!
Error type shared by every stage of the extraction.

Every variant is fatal for the run except `Coordinates`, which is only
produced when the strict coordinate policy is selected.
 */
use std::{io, path::PathBuf};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("couldn't open facility configuration {path:?} : {source}")]
    ConfigRead { path: PathBuf, source: io::Error },

    #[error("couldn't parse facility configuration {path:?} : {source}")]
    ConfigParse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("couldn't open video map {id} ({path:?}) : {source}")]
    VideoMapRead {
        id: String,
        path: PathBuf,
        source: io::Error,
    },

    #[error("couldn't parse video map {id} ({path:?}) : {source}")]
    VideoMapParse {
        id: String,
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("video map {id} is not available")]
    VideoMapMissing { id: String },

    #[error("invalid line coordinates in video map {map_id}, feature #{feature} : {source}")]
    Coordinates {
        map_id: String,
        feature: usize,
        source: serde_json::Error,
    },

    #[error("couldn't write output {path:?} : {source}")]
    OutputWrite { path: PathBuf, source: io::Error },

    #[error("couldn't serialize output : {0}")]
    OutputSerialize(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
