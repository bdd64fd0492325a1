use std::{borrow::Cow, cmp::Ordering, fmt, str::FromStr};

use crate::{
    error::{StoreError, StoreResult},
    model::movie::Movie,
};

pub type MovieComparator = fn(&Movie, &Movie) -> Ordering;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Title,
    Actor,
    Year,
    Genre,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Title, Field::Actor, Field::Year, Field::Genre];

    pub fn name(self) -> &'static str {
        match self {
            Field::Title => "title",
            Field::Actor => "actor",
            Field::Year => "year",
            Field::Genre => "genre",
        }
    }

    /// Ordering used for sorting. Text fields compare case-sensitively,
    /// `year` compares numerically.
    pub fn comparator(self) -> MovieComparator {
        match self {
            Field::Title => by_title,
            Field::Actor => by_actor,
            Field::Year => by_year,
            Field::Genre => by_genre,
        }
    }

    pub fn value_of(self, movie: &Movie) -> Cow<'_, str> {
        match self {
            Field::Title => Cow::Borrowed(movie.title.as_str()),
            Field::Actor => Cow::Borrowed(movie.actor.as_str()),
            Field::Year => Cow::Owned(movie.year.to_string()),
            Field::Genre => Cow::Borrowed(movie.genre.as_str()),
        }
    }

    /// Linear search predicate: case-insensitive containment for text fields,
    /// exact match against the rendered year otherwise.
    pub fn matches(self, movie: &Movie, query: &str) -> bool {
        match self {
            Field::Year => movie.year.to_string() == query,
            _ => self
                .value_of(movie)
                .to_lowercase()
                .contains(&query.to_lowercase()),
        }
    }
}

impl FromStr for Field {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "title" => Ok(Field::Title),
            "actor" => Ok(Field::Actor),
            "year" => Ok(Field::Year),
            "genre" => Ok(Field::Genre),
            _ => Err(StoreError::InvalidField(s.to_string())),
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

pub fn resolve(field: &str) -> StoreResult<MovieComparator> {
    field.parse::<Field>().map(Field::comparator)
}

fn by_title(a: &Movie, b: &Movie) -> Ordering {
    a.title.cmp(&b.title)
}

fn by_actor(a: &Movie, b: &Movie) -> Ordering {
    a.actor.cmp(&b.actor)
}

fn by_year(a: &Movie, b: &Movie) -> Ordering {
    a.year.cmp(&b.year)
}

fn by_genre(a: &Movie, b: &Movie) -> Ordering {
    a.genre.cmp(&b.genre)
}
