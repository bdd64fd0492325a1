use std::{env, process};

mod logging;

fn main() {
    logging::setup_logging();

    let config = moviestore::Config::from_args(env::args());
    if let Err(e) = moviestore::run(config) {
        log::error!("Movie store stopped unexpectedly: {}", e);
        process::exit(1);
    }
}
