use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Movie {
    pub title: String,
    pub actor: String,
    pub year: i32,
    pub genre: String,
}

impl Movie {
    pub fn new(
        title: impl Into<String>,
        actor: impl Into<String>,
        year: i32,
        genre: impl Into<String>,
    ) -> Self {
        Movie {
            title: title.into(),
            actor: actor.into(),
            year,
            genre: genre.into(),
        }
    }

    pub fn has_title(&self, title: &str) -> bool {
        self.title.to_lowercase() == title.to_lowercase()
    }
}

// Used both for the console listing and the export file.
impl fmt::Display for Movie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Title: {}, Actor: {}, Year: {}, Genre: {}",
            self.title, self.actor, self.year, self.genre
        )
    }
}
