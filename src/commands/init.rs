use crate::config::CONFIG_FILE_NAME;
use crate::io;
use anyhow::Result;
use std::path::Path;

pub const DEFAULT_CONFIG: &str = r##"# sigparse configuration

[input]
comment_prefix = "#"
skip_blank_lines = true

[batch]
parallel = true
fail_fast = false

[output]
default_format = "terminal"
"##;

/// Write the default config into `dir`.
pub fn init_config_in(dir: &Path, force: bool) -> Result<()> {
    let config_path = dir.join(CONFIG_FILE_NAME);

    if config_path.exists() && !force {
        anyhow::bail!("Configuration file already exists. Use --force to overwrite.");
    }

    io::write_file(&config_path, DEFAULT_CONFIG)?;
    log::info!("Wrote {}", config_path.display());
    println!("Created {} configuration file", CONFIG_FILE_NAME);

    Ok(())
}

pub fn init_config(force: bool) -> Result<()> {
    init_config_in(Path::new("."), force)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{parse_and_validate_config, SigparseConfig};
    use crate::io::output::OutputFormat;
    use tempfile::TempDir;

    #[test]
    fn test_default_config_parses_to_defaults() {
        assert!(DEFAULT_CONFIG.contains("comment_prefix = \"#\"\n"));
        assert!(DEFAULT_CONFIG.ends_with("default_format = \"terminal\"\n"));
        let config = parse_and_validate_config(DEFAULT_CONFIG).unwrap();
        let expected = SigparseConfig {
            output: crate::config::OutputConfig {
                default_format: Some(OutputFormat::Terminal),
                use_color: None,
            },
            ..SigparseConfig::default()
        };
        assert_eq!(config, expected);
    }

    #[test]
    fn test_init_refuses_overwrite_without_force() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join(CONFIG_FILE_NAME), "custom").unwrap();

        assert!(init_config_in(temp.path(), false).is_err());
        let kept = std::fs::read_to_string(temp.path().join(CONFIG_FILE_NAME)).unwrap();
        assert_eq!(kept, "custom");

        init_config_in(temp.path(), true).unwrap();
        let written = std::fs::read_to_string(temp.path().join(CONFIG_FILE_NAME)).unwrap();
        assert_eq!(written, DEFAULT_CONFIG);
    }
}
