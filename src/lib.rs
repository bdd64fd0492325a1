use std::io;

pub mod algorithms;
pub mod cli;
pub mod config;
pub mod error;
pub mod model;
pub mod persisters;
pub mod store;

pub use algorithms::{search::SearchAlgorithm, sort::SortAlgorithm};
pub use cli::menu::Menu;
pub use config::Config;
pub use error::{StoreError, StoreResult};
pub use model::{field::Field, movie::Movie};
pub use store::movie_store::{MovieStore, SearchOutcome};

pub fn run(config: Config) -> io::Result<()> {
    let store = MovieStore::open(&config.catalog_path);

    let stdin = io::stdin();
    let mut menu = Menu::new(store, stdin.lock(), io::stdout(), config.output_path);
    menu.run()?;

    log::info!("Movie store session finished");
    Ok(())
}
