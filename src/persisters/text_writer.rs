use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use crate::{error::StoreResult, model::movie::Movie};

pub struct TextWriter {}

impl TextWriter {
    /// Truncates `file_name` and writes one descriptive line per movie.
    pub fn save_movies_to_file<P: AsRef<Path>>(movies: &[Movie], file_name: P) -> StoreResult<()> {
        let file = File::create(file_name)?;
        TextWriter::write_movies(movies, BufWriter::new(file))
    }

    pub fn write_movies<W: Write>(movies: &[Movie], mut writer: W) -> StoreResult<()> {
        for movie in movies {
            writeln!(writer, "{}", movie)?;
        }
        writer.flush()?;

        Ok(())
    }
}
