use std::{
    io::{self, BufRead, Write},
    path::PathBuf,
};

use crate::{
    algorithms::{search::SearchAlgorithm, sort::SortAlgorithm},
    model::{field::Field, movie::Movie},
    store::movie_store::MovieStore,
};

/// Console front-end over a [`MovieStore`]. Reading past the end of the
/// input ends the session like choosing "Exit".
pub struct Menu<R, W> {
    store: MovieStore,
    input: R,
    output: W,
    output_path: PathBuf,
    is_manager: bool,
}

impl<R: BufRead, W: Write> Menu<R, W> {
    pub fn new(store: MovieStore, input: R, output: W, output_path: PathBuf) -> Self {
        Menu {
            store,
            input,
            output,
            output_path,
            is_manager: false,
        }
    }

    pub fn store(&self) -> &MovieStore {
        &self.store
    }

    pub fn into_parts(self) -> (MovieStore, W) {
        (self.store, self.output)
    }

    pub fn run(&mut self) -> io::Result<()> {
        match self.session() {
            Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => {
                log::debug!("Input closed, leaving the menu");
                Ok(())
            }
            other => other,
        }
    }

    fn session(&mut self) -> io::Result<()> {
        let password =
            self.prompt("Enter password for manager mode (or press Enter for user mode): ")?;
        self.is_manager = MovieStore::is_manager_password(&password);

        if self.is_manager {
            writeln!(self.output, "Manager mode activated.")?;
        } else {
            writeln!(self.output, "User mode activated.")?;
        }

        loop {
            self.display_menu()?;
            match self.prompt_int("Enter your choice: ")? {
                1 => self.display_all_movies()?,
                2 => self.search_movies()?,
                3 => self.sort_movies()?,
                4 if self.is_manager => self.add_movie()?,
                5 if self.is_manager => self.remove_movie()?,
                4 | 5 => writeln!(self.output, "Invalid option for user mode.")?,
                0 => {
                    writeln!(
                        self.output,
                        "Thank you for using the Movie Store Management System!"
                    )?;
                    return Ok(());
                }
                _ => writeln!(self.output, "Invalid choice. Please try again.")?,
            }
        }
    }

    fn display_menu(&mut self) -> io::Result<()> {
        writeln!(self.output, "\n--- Movie Store Management System ---")?;
        writeln!(self.output, "1. Display all movies")?;
        writeln!(self.output, "2. Search movies")?;
        writeln!(self.output, "3. Sort movies")?;
        if self.is_manager {
            writeln!(self.output, "4. Add a movie")?;
            writeln!(self.output, "5. Remove a movie")?;
        }
        writeln!(self.output, "0. Exit")
    }

    fn display_all_movies(&mut self) -> io::Result<()> {
        for movie in self.store.movies() {
            writeln!(self.output, "{}", movie)?;
        }
        Ok(())
    }

    fn search_movies(&mut self) -> io::Result<()> {
        let field = self.prompt("Search by (title/actor/year/genre): ")?;
        let query = self.prompt("Enter search query: ")?;
        let algorithm = loop {
            let choice = self.prompt("Choose search algorithm (linear/binary): ")?;
            if let Ok(algorithm) = choice.parse::<SearchAlgorithm>() {
                break algorithm;
            }
        };

        let field = match field.parse::<Field>() {
            Ok(field) => field,
            Err(e) => return writeln!(self.output, "{}", e),
        };

        match self.store.search(&query, field, algorithm) {
            Ok(outcome) => {
                if outcome.results.is_empty() {
                    writeln!(self.output, "No movies found.")?;
                }
                for movie in &outcome.results {
                    writeln!(self.output, "{}", movie)?;
                }
                writeln!(
                    self.output,
                    "Search completed in {} milliseconds.",
                    outcome.elapsed_millis()
                )
            }
            Err(e) => writeln!(self.output, "{}", e),
        }
    }

    fn sort_movies(&mut self) -> io::Result<()> {
        let field = self.prompt("Sort by (title/actor/year/genre): ")?;
        let algorithm = self.prompt(
            "Choose sorting algorithm (bubblesort/selectionsort/insertionsort/mergesort): ",
        )?;

        let parsed = (field.parse::<Field>(), algorithm.parse::<SortAlgorithm>());
        let (field, algorithm) = match parsed {
            (Ok(field), Ok(algorithm)) => (field, algorithm),
            (Err(e), _) | (_, Err(e)) => return writeln!(self.output, "{}", e),
        };

        let elapsed = self.store.sort_movies(field, algorithm);
        writeln!(
            self.output,
            "Sorting completed in {} milliseconds.",
            elapsed.as_millis()
        )?;

        match self.store.export_to_file(&self.output_path) {
            Ok(()) => writeln!(
                self.output,
                "Sorted movies have been written to {}",
                self.output_path.display()
            )?,
            Err(e) => {
                log::error!("Error when exporting sorted movies: {}", e);
                writeln!(self.output, "Error writing to file: {}", e)?
            }
        }

        writeln!(self.output, "Sorted Movies:")?;
        self.display_all_movies()
    }

    fn add_movie(&mut self) -> io::Result<()> {
        let title = self.prompt("Enter movie title: ")?;
        let actor = self.prompt("Enter lead actor/actress: ")?;
        let year = self.prompt_int("Enter release year: ")?;
        let genre = self.prompt("Enter genre: ")?;

        self.store.add_movie(Movie::new(title, actor, year, genre));
        writeln!(self.output, "Movie added successfully.")
    }

    fn remove_movie(&mut self) -> io::Result<()> {
        let title = self.prompt("Enter the title of the movie to remove: ")?;

        if self.store.remove_movie(&title) {
            writeln!(self.output, "Movie removed successfully.")
        } else {
            writeln!(self.output, "Movie not found.")
        }
    }

    fn prompt(&mut self, text: &str) -> io::Result<String> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "input closed"));
        }

        Ok(line.trim_end_matches(&['\r', '\n'][..]).to_string())
    }

    fn prompt_int(&mut self, text: &str) -> io::Result<i32> {
        loop {
            match self.prompt(text)?.trim().parse::<i32>() {
                Ok(number) => return Ok(number),
                Err(_) => writeln!(self.output, "Invalid input. Please enter a number.")?,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_menu(store: MovieStore, script: &str) -> (MovieStore, String) {
        let mut menu = Menu::new(
            store,
            script.as_bytes(),
            Vec::new(),
            PathBuf::from("/nonexistent-dir/output.txt"),
        );
        menu.run().unwrap();

        let (store, output) = menu.into_parts();
        (store, String::from_utf8(output).unwrap())
    }

    fn sample_store() -> MovieStore {
        let mut store = MovieStore::new();
        store.add_movie(Movie::new("Up", "Ed Asner", 2009, "Animation"));
        store.add_movie(Movie::new("Heat", "Al Pacino", 1995, "Crime"));
        store
    }

    #[test]
    fn user_mode_cannot_add_movies() {
        let (store, output) = run_menu(sample_store(), "\n4\n0\n");

        assert!(output.contains("User mode activated."));
        assert!(output.contains("Invalid option for user mode."));
        assert!(!output.contains("4. Add a movie"));
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn manager_can_add_and_remove() {
        let script = "admin123\n4\nAlien\nSigourney Weaver\nnineteen\n1979\nHorror\n5\nup\n0\n";
        let (store, output) = run_menu(sample_store(), script);

        assert!(output.contains("Manager mode activated."));
        assert!(output.contains("Invalid input. Please enter a number."));
        assert!(output.contains("Movie added successfully."));
        assert!(output.contains("Movie removed successfully."));

        let titles: Vec<_> = store.movies().iter().map(|m| m.title.as_str()).collect();
        assert_eq!(titles, vec!["Heat", "Alien"]);
    }

    #[test]
    fn search_reprompts_for_algorithm_and_prints_results() {
        let (_, output) = run_menu(sample_store(), "\n2\ngenre\ncrime\njump\nlinear\n0\n");

        assert_eq!(
            output
                .matches("Choose search algorithm (linear/binary): ")
                .count(),
            2
        );
        assert!(output.contains("Title: Heat, Actor: Al Pacino, Year: 1995, Genre: Crime"));
        assert!(output.contains("Search completed in"));
    }

    #[test]
    fn invalid_search_input_is_reported() {
        let script = "\n2\nrating\nx\nlinear\n2\nyear\nsoon\nbinary\n0\n";
        let (_, output) = run_menu(sample_store(), script);

        assert!(output.contains("Invalid field: rating"));
        assert!(output.contains("Invalid query for numeric field: soon"));
    }

    #[test]
    fn sort_reports_export_failure_and_still_lists() {
        let (store, output) = run_menu(sample_store(), "\n3\nyear\nmergesort\n0\n");

        assert!(output.contains("Sorting completed in"));
        assert!(output.contains("Error writing to file:"));
        assert!(output.contains("Sorted Movies:"));
        assert_eq!(store.movies()[0].title, "Heat");
    }

    #[test]
    fn unknown_sort_algorithm_leaves_order() {
        let (store, output) = run_menu(sample_store(), "\n3\ntitle\nquicksort\n0\n");

        assert!(output.contains("Invalid algorithm: quicksort"));
        assert_eq!(store.movies()[0].title, "Up");
    }

    #[test]
    fn closed_input_ends_session() {
        let (_, output) = run_menu(sample_store(), "\n1\n");

        assert!(output.contains("Title: Up, Actor: Ed Asner, Year: 2009, Genre: Animation"));
        assert!(!output.contains("Thank you"));
    }
}
