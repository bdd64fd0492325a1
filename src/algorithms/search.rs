use std::{cmp::Ordering, fmt, str::FromStr};

use crate::{
    algorithms::sort::merge_sort,
    error::{StoreError, StoreResult},
    model::{field::Field, movie::Movie},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchAlgorithm {
    Linear,
    Binary,
}

impl SearchAlgorithm {
    pub fn name(self) -> &'static str {
        match self {
            SearchAlgorithm::Linear => "linear",
            SearchAlgorithm::Binary => "binary",
        }
    }

    /// Binary search reorders `movies` by `field` before probing.
    pub fn search(
        self,
        movies: &mut [Movie],
        query: &str,
        field: Field,
    ) -> StoreResult<Vec<Movie>> {
        match self {
            SearchAlgorithm::Linear => Ok(linear_search(movies, query, field)),
            SearchAlgorithm::Binary => binary_search(movies, query, field),
        }
    }
}

impl FromStr for SearchAlgorithm {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "linear" => Ok(SearchAlgorithm::Linear),
            "binary" => Ok(SearchAlgorithm::Binary),
            _ => Err(StoreError::InvalidAlgorithm(s.to_string())),
        }
    }
}

impl fmt::Display for SearchAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

pub fn linear_search(movies: &[Movie], query: &str, field: Field) -> Vec<Movie> {
    movies
        .iter()
        .filter(|movie| field.matches(movie, query))
        .cloned()
        .collect()
}

/// Sorts `movies` by `field` (merge sort), probes for an exact match and then
/// widens to the neighbours accepted by the linear search predicate.
pub fn binary_search(movies: &mut [Movie], query: &str, field: Field) -> StoreResult<Vec<Movie>> {
    let key = ProbeKey::new(field, query)?;
    merge_sort(movies, &field.comparator());

    let mut low = 0;
    let mut high = movies.len();

    while low < high {
        let mid = low + (high - low) / 2;
        match key.compare(&movies[mid]) {
            Ordering::Equal => {
                let mut start = mid;
                while start > 0 && field.matches(&movies[start - 1], query) {
                    start -= 1;
                }

                let mut end = mid + 1;
                while end < movies.len() && field.matches(&movies[end], query) {
                    end += 1;
                }

                return Ok(movies[start..end].to_vec());
            }
            Ordering::Less => low = mid + 1,
            Ordering::Greater => high = mid,
        }
    }

    Ok(vec![])
}

enum ProbeKey {
    Year(i32),
    Text(Field, String),
}

impl ProbeKey {
    fn new(field: Field, query: &str) -> StoreResult<Self> {
        match field {
            Field::Year => query
                .parse::<i32>()
                .map(ProbeKey::Year)
                .map_err(|_| StoreError::InvalidQuery(query.to_string())),
            _ => Ok(ProbeKey::Text(field, query.to_lowercase())),
        }
    }

    // Ordering of the movie's value relative to the key.
    fn compare(&self, movie: &Movie) -> Ordering {
        match self {
            ProbeKey::Year(year) => movie.year.cmp(year),
            ProbeKey::Text(field, lowered) => field.value_of(movie).to_lowercase().cmp(lowered),
        }
    }
}
