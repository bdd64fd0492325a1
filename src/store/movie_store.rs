use std::{
    fs::File,
    io::{BufReader, Read, Write},
    path::Path,
    time::{Duration, Instant},
};

use crate::{
    algorithms::{search::SearchAlgorithm, sort::SortAlgorithm},
    error::StoreResult,
    model::{field::Field, movie::Movie},
    persisters::{movie_file_reader::MovieFileReader, text_writer::TextWriter},
};

const MANAGER_PASSWORD: &str = "admin123";

#[derive(Debug)]
pub struct SearchOutcome {
    pub results: Vec<Movie>,
    pub elapsed: Duration,
}

impl SearchOutcome {
    pub fn elapsed_millis(&self) -> u128 {
        self.elapsed.as_millis()
    }
}

/// Ordered, in-memory movie catalog. Titles are not unique.
#[derive(Debug, Default)]
pub struct MovieStore {
    movies: Vec<Movie>,
}

impl MovieStore {
    pub fn new() -> Self {
        MovieStore { movies: vec![] }
    }

    /// Builds a store from `path`. Read failures are logged and the store
    /// keeps whatever was parsed before the failure.
    pub fn open<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref();
        let mut store = MovieStore::new();

        match store.load_from_file(path) {
            Ok(count) => log::info!("Loaded {} movies from {}", count, path.display()),
            Err(e) => log::error!(
                "Error reading file {}: {}. Continuing with {} movies",
                path.display(),
                e,
                store.len()
            ),
        }

        store
    }

    pub fn load_from_file<P: AsRef<Path>>(&mut self, path: P) -> StoreResult<usize> {
        let file = File::open(path)?;
        self.load_from_reader(BufReader::new(file))
    }

    /// Appends every well-formed line of `reader`. Stops at the first line
    /// with a non-numeric year, keeping the movies appended so far.
    pub fn load_from_reader<R: Read>(&mut self, reader: R) -> StoreResult<usize> {
        let mut loaded = 0;
        for item in MovieFileReader::read_movies(reader) {
            if let Some(movie) = item? {
                self.movies.push(movie);
                loaded += 1;
            }
        }

        Ok(loaded)
    }

    pub fn export_to_file<P: AsRef<Path>>(&self, path: P) -> StoreResult<()> {
        let path = path.as_ref();
        TextWriter::save_movies_to_file(&self.movies, path)?;
        log::info!("Wrote {} movies to {}", self.movies.len(), path.display());
        Ok(())
    }

    pub fn export_to_writer<W: Write>(&self, writer: W) -> StoreResult<()> {
        TextWriter::write_movies(&self.movies, writer)
    }

    pub fn add_movie(&mut self, movie: Movie) {
        log::debug!("Adding movie {}", movie);
        self.movies.push(movie);
    }

    pub fn remove_movie(&mut self, title: &str) -> bool {
        self.remove_by_title(title) > 0
    }

    /// Removes every movie whose title equals `title` ignoring case.
    pub fn remove_by_title(&mut self, title: &str) -> usize {
        let before = self.movies.len();
        self.movies.retain(|movie| !movie.has_title(title));
        let removed = before - self.movies.len();

        log::info!("Removed {} movies titled {:?}", removed, title);
        removed
    }

    pub fn movies(&self) -> &[Movie] {
        &self.movies
    }

    pub fn len(&self) -> usize {
        self.movies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }

    pub fn display_movie(&self, title: &str) -> Option<&Movie> {
        self.movies.iter().find(|movie| movie.has_title(title))
    }

    pub fn search_movies(&self, query: &str, field: Field) -> Vec<Movie> {
        crate::algorithms::search::linear_search(&self.movies, query, field)
    }

    pub fn sort_movies(&mut self, field: Field, algorithm: SortAlgorithm) -> Duration {
        let comparator = field.comparator();

        let start = Instant::now();
        algorithm.sort(&mut self.movies, &comparator);
        let elapsed = start.elapsed();

        log::debug!(
            "Sorted {} movies by {} with {} in {:?}",
            self.movies.len(),
            field,
            algorithm,
            elapsed
        );
        elapsed
    }

    /// A binary search leaves the catalog sorted by `field`.
    pub fn search(
        &mut self,
        query: &str,
        field: Field,
        algorithm: SearchAlgorithm,
    ) -> StoreResult<SearchOutcome> {
        let start = Instant::now();
        let results = algorithm.search(&mut self.movies, query, field)?;
        let elapsed = start.elapsed();

        log::debug!(
            "{} search for {:?} by {} found {} movies in {:?}",
            algorithm,
            query,
            field,
            results.len(),
            elapsed
        );
        Ok(SearchOutcome { results, elapsed })
    }

    pub fn is_manager_password(candidate: &str) -> bool {
        candidate == MANAGER_PASSWORD
    }
}
