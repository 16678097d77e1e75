use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::Deserialize;

pub const DEFAULT_BASE_URL: &str = "https://adventofcode.com";

/// Settings shared by every day's binary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub session: Option<String>,
    pub data_dir: PathBuf,
    pub log_dir: PathBuf,
    pub base_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            session: None,
            data_dir: PathBuf::from("data"),
            log_dir: PathBuf::from("."),
            base_url: DEFAULT_BASE_URL.to_owned(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    session: Option<String>,
    data_dir: Option<PathBuf>,
    log_dir: Option<PathBuf>,
    base_url: Option<String>,
}

impl Config {
    /// Defaults, then `aoc.toml`, then the aocd token file, then the environment.
    pub fn load() -> anyhow::Result<Self> {
        let mut config = Config::default();
        config.merge_file(Path::new("aoc.toml"))?;
        if let Some(home) = std::env::var_os("HOME") {
            let token = Path::new(&home).join(".config/aocd/token");
            if let Ok(session) = std::fs::read_to_string(token) {
                config.session = Some(session.trim().to_owned());
            }
        }
        config.merge_env(|key| std::env::var(key).ok());
        Ok(config)
    }

    pub fn merge_file(&mut self, path: &Path) -> anyhow::Result<()> {
        let Ok(text) = std::fs::read_to_string(path) else {return Ok(())};
        let file: ConfigFile = toml::from_str(&text)
            .with_context(|| format!("invalid config file {}", path.display()))?;
        if file.session.is_some() {self.session = file.session}
        if let Some(dir) = file.data_dir {self.data_dir = dir}
        if let Some(dir) = file.log_dir {self.log_dir = dir}
        if let Some(url) = file.base_url {self.base_url = url}
        Ok(())
    }

    pub fn merge_env(&mut self, var: impl Fn(&str) -> Option<String>) {
        if let Some(session) = var("AOC_SESSION").filter(|s| !s.trim().is_empty()) {
            self.session = Some(session.trim().to_owned());
        }
        if let Some(dir) = var("AOC_DATA_DIR") {self.data_dir = dir.into()}
    }

    /// Where `--local` reads from and where fetched inputs are cached.
    pub fn input_path(&self, year: u16, day: u8) -> PathBuf {
        self.data_dir.join(format!("input{year}-{day}.txt"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn file_then_env() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "session = \"from-file\"\ndata_dir = \"inputs\"").unwrap();

        let mut config = Config::default();
        config.merge_file(file.path()).unwrap();
        assert_eq!(config.session.as_deref(), Some("from-file"));
        assert_eq!(config.input_path(2022, 7), PathBuf::from("inputs/input2022-7.txt"));

        config.merge_env(|key| (key == "AOC_SESSION").then(|| " from-env\n".to_owned()));
        assert_eq!(config.session.as_deref(), Some("from-env"));
        assert_eq!(config.data_dir, PathBuf::from("inputs"));
    }

    #[test]
    fn missing_file_is_fine() {
        let mut config = Config::default();
        config.merge_file(Path::new("definitely/not/here.toml")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn unknown_keys_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "sesion = \"typo\"").unwrap();
        assert!(Config::default().merge_file(file.path()).is_err());
    }
}
