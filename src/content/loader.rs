//! Loader for RON content files at startup.

use ron::Options;
use std::fs;
use std::path::Path;

use super::data::DungeonConfig;
use super::validation::validate_dungeon_config;

/// Error type for content loading failures.
#[derive(Debug)]
pub struct ContentLoadError {
    pub file: String,
    pub message: String,
}

impl std::fmt::Display for ContentLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Failed to load {}: {}", self.file, self.message)
    }
}

impl std::error::Error for ContentLoadError {}

/// Create RON options with extensions enabled for more flexible parsing.
fn ron_options() -> Options {
    Options::default().with_default_extension(ron::extensions::Extensions::IMPLICIT_SOME)
}

/// Parse a single RON struct from a string. `file` is only used for errors.
pub(crate) fn parse_single<T>(file: &str, contents: &str) -> Result<T, ContentLoadError>
where
    T: for<'de> serde::Deserialize<'de>,
{
    ron_options()
        .from_str(contents)
        .map_err(|e| ContentLoadError {
            file: file.to_string(),
            message: format!("Parse error: {}", e),
        })
}

/// Load a single RON struct from disk.
fn load_single_file<T>(path: &Path) -> Result<T, ContentLoadError>
where
    T: for<'de> serde::Deserialize<'de>,
{
    let file_name = path.display().to_string();
    let contents = fs::read_to_string(path).map_err(|e| ContentLoadError {
        file: file_name.clone(),
        message: format!("IO error: {}", e),
    })?;

    parse_single(&file_name, &contents)
}

/// Parse and validate a dungeon config. Validation failures are reported
/// as load errors against the same file.
pub(crate) fn parse_dungeon_config(
    file: &str,
    contents: &str,
) -> Result<DungeonConfig, Vec<ContentLoadError>> {
    let config: DungeonConfig = parse_single(file, contents).map_err(|e| vec![e])?;
    check_config(file, config)
}

/// Load assets/data/dungeon.ron into a validated DungeonConfig.
pub fn load_dungeon_config(base_path: &Path) -> Result<DungeonConfig, Vec<ContentLoadError>> {
    let path = base_path.join("dungeon.ron");
    let config: DungeonConfig = load_single_file(&path).map_err(|e| vec![e])?;
    check_config(&path.display().to_string(), config)
}

fn check_config(file: &str, config: DungeonConfig) -> Result<DungeonConfig, Vec<ContentLoadError>> {
    let errors = validate_dungeon_config(&config);
    if errors.is_empty() {
        Ok(config)
    } else {
        Err(errors
            .into_iter()
            .map(|e| ContentLoadError {
                file: file.to_string(),
                message: e.to_string(),
            })
            .collect())
    }
}
