pub mod movie_file_reader;
pub mod text_writer;
