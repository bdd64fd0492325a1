use std::io::Read;

use csv::{ByteRecord, ReaderBuilder};

use crate::{
    error::{StoreError, StoreResult},
    model::movie::Movie,
};

pub struct MovieFileReader {}

impl MovieFileReader {
    /// Yields one item per non-blank line: `Ok(None)` for lines that do not
    /// carry exactly four fields, an error when the year is not a number.
    /// Bytes that are not valid UTF-8 are replaced, never rejected.
    pub fn read_movies<R: Read>(reader: R) -> impl Iterator<Item = StoreResult<Option<Movie>>> {
        ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .quoting(false)
            .from_reader(reader)
            .into_byte_records()
            .map(|record| MovieFileReader::parse_record(&record?))
    }

    fn parse_record(record: &ByteRecord) -> StoreResult<Option<Movie>> {
        let fields: Vec<String> = record
            .iter()
            .map(|field| String::from_utf8_lossy(field).into_owned())
            .collect();

        // Trailing empty fields do not count, so "a,b,1999,c," is still four fields.
        let field_count = fields
            .iter()
            .rposition(|field| !field.is_empty())
            .map_or(0, |last| last + 1);

        if field_count != 4 {
            log::debug!("Skipping malformed movie line: {:?}", fields);
            return Ok(None);
        }

        let year_text = fields[2].trim();
        let year = year_text
            .parse::<i32>()
            .map_err(|_| StoreError::InvalidYear {
                line: record.position().map_or(0, |p| p.line()),
                value: year_text.to_string(),
            })?;

        Ok(Some(Movie::new(
            fields[0].trim(),
            fields[1].trim(),
            year,
            fields[3].trim(),
        )))
    }
}
