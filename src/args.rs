use std::{path::PathBuf, process::exit};
use clap::Parser;
use log::error;

use crate::{geojson::CoordinatePolicy, source};

#[derive(Debug, Parser, Clone)]
/// Extract the ERAM map line groups of a facility from its configuration and video maps
pub struct Args{
    /// Facility identifier (e.g. ZNY) :
    /// the configuration is read from <root>/ARTCCs/<facility>.json
    /// and the video maps from <root>/VideoMaps/<facility>/
    pub facility: String,
    /// Root directory :
    /// the directory containing the ARTCCs and VideoMaps folders
    #[clap(short, long, default_value = ".")]
    pub root: PathBuf,
    /// Output file (.json)
    /// if not specified, <root>/<facility>-eram-maps.json
    #[clap(short, long)]
    pub output: Option<PathBuf>,
    /// Overwrite :
    /// if specified, will overwrite the output file if it already exists
    #[clap(long)]
    pub overwrite: bool,
    /// Strict coordinates :
    /// if specified, a line whose coordinates can't be decoded aborts the run
    /// instead of being kept as an empty line
    #[clap(short, long)]
    pub strict_coordinates: bool,
    /// Pretty :
    /// if specified, the output is indented
    #[clap(short, long)]
    pub pretty: bool,
    /// verbose :
    /// if specified, will print more information
    #[clap(short, long)]
    pub verbose: bool,
}

impl Args{
    pub fn init_logger(&self){
        let level = if self.verbose { log::LevelFilter::Debug } else { log::LevelFilter::Info };
        let mut builder = pretty_env_logger::formatted_builder();
        builder.filter_level(level);
        if let Ok(filters) = std::env::var("RUST_LOG") {
            builder.parse_filters(&filters);
        }
        builder.init();
        if self.verbose {
            log::debug!("Called Args :\n{:#?}", self);
        }
    }

    pub fn config_path(&self) -> PathBuf {
        source::config_path(&self.root, &self.facility)
    }

    pub fn output_path(&self) -> PathBuf {
        match &self.output {
            Some(output) => output.clone(),
            None => self.root.join(format!("{}-eram-maps.json", self.facility)),
        }
    }

    pub fn coordinate_policy(&self) -> CoordinatePolicy {
        if self.strict_coordinates { CoordinatePolicy::Strict } else { CoordinatePolicy::Lenient }
    }

    pub fn validate_paths(&self){
        let config = self.config_path();
        if !config.exists(){
            error!("Facility configuration does not exist : {:?}", config);
            exit(1);
        }

        let output = self.output_path();
        if output.exists(){
            if !self.overwrite{
                error!("Output file already exists : {:?}\nUse --overwrite to overwrite it", output);
                exit(1);
            }
        }
    }
}

lazy_static::lazy_static! {
    pub static ref ARGS: Args = Args::parse();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let args = Args::try_parse_from(["eram-map-extractor", "ZNY"]).unwrap();
        assert_eq!(args.facility, "ZNY");
        assert_eq!(args.config_path(), PathBuf::from("./ARTCCs/ZNY.json"));
        assert_eq!(args.output_path(), PathBuf::from("./ZNY-eram-maps.json"));
        assert_eq!(args.coordinate_policy(), CoordinatePolicy::Lenient);
        assert!(!args.pretty && !args.overwrite && !args.verbose);
    }

    #[test]
    fn flags() {
        let args = Args::try_parse_from([
            "eram-map-extractor", "ZDC", "--root", "/crc", "-o", "/tmp/out.json", "-s", "-p", "--overwrite",
        ])
        .unwrap();
        assert_eq!(args.config_path(), PathBuf::from("/crc/ARTCCs/ZDC.json"));
        assert_eq!(args.output_path(), PathBuf::from("/tmp/out.json"));
        assert_eq!(args.coordinate_policy(), CoordinatePolicy::Strict);
        assert!(args.pretty && args.overwrite);
    }

    #[test]
    fn facility_is_required() {
        assert!(Args::try_parse_from(["eram-map-extractor"]).is_err());
    }
}
