mod aggregate;
mod args;
mod bcg;
mod builder;
mod defaults;
mod error;
mod facility;
mod geojson;
mod merge;
mod output;
mod source;

use std::process::exit;

use log::{error, info, warn};

use args::ARGS;
use facility::ArtccConfig;
use source::VideoMapDir;

fn main() {
    ARGS.init_logger();
    ARGS.validate_paths();

    let config_path = ARGS.config_path();
    info!("Extracting ERAM maps of {} from {:?}", ARGS.facility, config_path);

    let config = match ArtccConfig::from_path(&config_path) {
        Ok(ok) => ok,
        Err(err) => {
            error!("{}", err);
            exit(1);
        },
    };
    if !config.facility.id.is_empty() && config.facility.id != ARGS.facility {
        warn!("{:?} describes facility {}, not {}", config_path, config.facility.id, ARGS.facility);
    }

    let video_maps = VideoMapDir::new(&ARGS.root, &ARGS.facility);
    let groups = match builder::build_groups(&config, &video_maps, ARGS.coordinate_policy()) {
        Ok(ok) => ok,
        Err(err) => {
            error!("{}", err);
            exit(1);
        },
    };

    let output = ARGS.output_path();
    if let Err(err) = output::save_groups(&output, &groups, ARGS.pretty) {
        error!("{}", err);
        exit(1);
    }
    info!("Wrote {} map categories to {:?}", groups.len(), output);
}
