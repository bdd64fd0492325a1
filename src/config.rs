use std::path::PathBuf;

const DEFAULT_CATALOG_FILE: &str = "movies.txt";
const DEFAULT_OUTPUT_FILE: &str = "output.txt";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub catalog_path: PathBuf,
    pub output_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            catalog_path: PathBuf::from(DEFAULT_CATALOG_FILE),
            output_path: PathBuf::from(DEFAULT_OUTPUT_FILE),
        }
    }
}

impl Config {
    /// `args` as returned by `std::env::args`: program name, then the
    /// optional catalog file and the optional export destination.
    pub fn from_args<I: IntoIterator<Item = String>>(args: I) -> Self {
        let mut args = args.into_iter().skip(1);
        let defaults = Config::default();

        Config {
            catalog_path: args.next().map_or(defaults.catalog_path, PathBuf::from),
            output_path: args.next().map_or(defaults.output_path, PathBuf::from),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn falls_back_to_default_files() {
        assert_eq!(Config::from_args(args(&["moviestore"])), Config::default());
    }

    #[test]
    fn reads_positional_paths() {
        let config = Config::from_args(args(&["moviestore", "catalog.txt", "sorted.txt"]));

        assert_eq!(config.catalog_path, PathBuf::from("catalog.txt"));
        assert_eq!(config.output_path, PathBuf::from("sorted.txt"));
    }
}
