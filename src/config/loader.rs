use std::fs;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use super::core::{SigparseConfig, CONFIG_FILE_NAME};

const MAX_TRAVERSAL_DEPTH: usize = 10;

fn read_config_file(path: &Path) -> Result<String, std::io::Error> {
    let file = fs::File::open(path)?;
    let mut reader = BufReader::new(file);
    let mut contents = String::new();
    reader.read_to_string(&mut contents)?;
    Ok(contents)
}

/// Parse config from a TOML string
pub fn parse_and_validate_config(contents: &str) -> Result<SigparseConfig, String> {
    toml::from_str::<SigparseConfig>(contents)
        .map_err(|e| format!("Failed to parse {}: {}", CONFIG_FILE_NAME, e))
}

fn try_load_config_from_path(config_path: &Path) -> Option<SigparseConfig> {
    let contents = match read_config_file(config_path) {
        Ok(contents) => contents,
        Err(e) => {
            handle_read_error(config_path, &e);
            return None;
        }
    };

    match parse_and_validate_config(&contents) {
        Ok(config) => {
            log::debug!("Loaded config from {}", config_path.display());
            Some(config)
        }
        Err(e) => {
            log::warn!("{}. Using defaults.", e);
            None
        }
    }
}

fn handle_read_error(config_path: &Path, error: &std::io::Error) {
    // Only log actual errors, not "file not found"
    if error.kind() != std::io::ErrorKind::NotFound {
        log::warn!(
            "Failed to read config file {}: {}",
            config_path.display(),
            error
        );
    }
}

/// `start` followed by its parents, at most `max_depth` entries.
pub fn directory_ancestors(start: PathBuf, max_depth: usize) -> impl Iterator<Item = PathBuf> {
    std::iter::successors(Some(start), |dir| {
        let mut parent = dir.clone();
        if parent.pop() {
            Some(parent)
        } else {
            None
        }
    })
    .take(max_depth)
}

/// Search `start` and its ancestors for the first loadable config file.
pub fn load_config_from(start: PathBuf) -> SigparseConfig {
    directory_ancestors(start, MAX_TRAVERSAL_DEPTH)
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .find_map(|path| try_load_config_from_path(&path))
        .unwrap_or_else(|| {
            log::debug!(
                "No config found after checking {} directories. Using default config.",
                MAX_TRAVERSAL_DEPTH
            );
            SigparseConfig::default()
        })
}

pub fn load_config() -> SigparseConfig {
    match std::env::current_dir() {
        Ok(dir) => load_config_from(dir),
        Err(e) => {
            log::warn!(
                "Failed to get current directory: {}. Using default config.",
                e
            );
            SigparseConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::output::OutputFormat;
    use indoc::indoc;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    #[test]
    fn test_parse_full_config() {
        let config = parse_and_validate_config(indoc! {r#"
            [input]
            comment_prefix = "//"
            skip_blank_lines = false

            [batch]
            parallel = false
            fail_fast = true

            [output]
            default_format = "json"
        "#})
        .unwrap();

        assert_eq!(config.input.comment_prefix, "//");
        assert!(!config.input.skip_blank_lines);
        assert!(!config.batch.parallel);
        assert!(config.batch.fail_fast);
        assert_eq!(config.output.default_format, Some(OutputFormat::Json));
    }

    #[test]
    fn test_parse_empty_config_uses_defaults() {
        let config = parse_and_validate_config("").unwrap();
        assert_eq!(config, SigparseConfig::default());
    }

    #[test]
    fn test_parse_partial_section_fills_defaults() {
        let config = parse_and_validate_config("[batch]\nfail_fast = true\n").unwrap();
        assert!(config.batch.parallel);
        assert!(config.batch.fail_fast);
        assert_eq!(config.input.comment_prefix, "#");
    }

    #[test]
    fn test_parse_invalid_config_reports_file_name() {
        let err = parse_and_validate_config("[batch]\nparallel = \"yes\"\n").unwrap_err();
        assert!(err.starts_with("Failed to parse .sigparse.toml"));
    }

    #[test]
    fn test_directory_ancestors_respects_depth() {
        let dirs: Vec<PathBuf> = directory_ancestors(PathBuf::from("/a/b/c"), 2).collect();
        assert_eq!(dirs, vec![PathBuf::from("/a/b/c"), PathBuf::from("/a/b")]);
    }

    #[test]
    fn test_load_config_from_parent_directory() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join(CONFIG_FILE_NAME),
            "[output]\ndefault_format = \"markdown\"\n",
        )
        .unwrap();
        let nested = temp.path().join("nested").join("deeper");
        fs::create_dir_all(&nested).unwrap();

        let config = load_config_from(nested);
        assert_eq!(config.output.default_format, Some(OutputFormat::Markdown));
    }

    #[test]
    fn test_load_config_invalid_file_falls_back_to_default() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(CONFIG_FILE_NAME), "not = [valid").unwrap();

        let config = load_config_from(temp.path().to_path_buf());
        assert_eq!(config, SigparseConfig::default());
    }
}
