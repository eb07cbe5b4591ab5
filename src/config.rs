use std::io::ErrorKind;
use std::path::PathBuf;
use std::{env, io};

use serde::Deserialize;

pub const DEFAULT_SITE_BASE: &str = "https://sindikatstudio83.me";
pub const DEFAULT_TEMPLATE_PATH: &str = "templates/blog-post-template.html";
pub const DEFAULT_OUT_DIR: &str = "sr-me/blog";

#[derive(Deserialize, Default)]
pub struct ConfigFile {
    pub source: Option<Source>,
    pub paths: Option<Paths>,
    pub log: Option<Log>,
    pub sitemap: Option<Sitemap>,
}

#[derive(Deserialize, Default)]
pub struct Source {
    pub csv_url: Option<String>,
    pub site_base: Option<String>,
}

#[derive(Deserialize, Default)]
pub struct Paths {
    pub template: Option<PathBuf>,
    pub out_dir: Option<PathBuf>,
}

#[derive(Deserialize)]
pub struct Log {
    pub level: LogLevel,
    pub log_to_console: bool,
    pub location: Option<PathBuf>,
}

#[derive(Deserialize, Copy, Clone)]
pub enum LogLevel {
    Critical = 0,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

#[derive(Deserialize, Default)]
pub struct Sitemap {
    pub file_name: Option<String>,
}

/// Fully resolved settings the pipeline runs with. Built once in main and
/// passed down, never read from the environment again.
pub struct Config {
    pub source_url: String,
    pub site_base: String,
    pub template_path: PathBuf,
    pub out_dir: PathBuf,
    pub log: Option<Log>,
    pub sitemap: Option<Sitemap>,
}

pub fn read_config_file(cfg_path: &PathBuf) -> io::Result<ConfigFile> {
    let cfg_content = match std::fs::read_to_string(cfg_path) {
        Ok(content) => content,
        Err(e) => return Err(io::Error::new(e.kind(), format!("Error opening configuration file {}: {}", cfg_path.to_string_lossy(), e))),
    };

    match toml::from_str::<ConfigFile>(cfg_content.as_str()) {
        Ok(cfg) => Ok(cfg),
        Err(e) => Err(io::Error::new(
            ErrorKind::InvalidData, format!("Error parsing configuration file: {}", e))),
    }
}

/// Environment variables win over the configuration file. SHEET_CSV_URL is
/// the only required setting; everything else has a default.
pub fn resolve_config(cfg_file: Option<ConfigFile>) -> io::Result<Config> {
    resolve_with_env(cfg_file, env_var("SHEET_CSV_URL"), env_var("SITE_BASE"))
}

fn env_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.trim().is_empty())
}

fn resolve_with_env(cfg_file: Option<ConfigFile>, env_url: Option<String>, env_base: Option<String>) -> io::Result<Config> {
    let cfg_file = cfg_file.unwrap_or_default();
    let source = cfg_file.source.unwrap_or_default();
    let paths = cfg_file.paths.unwrap_or_default();

    let source_url = env_url
        .or(source.csv_url)
        .map(|u| u.trim().to_string())
        .filter(|u| !u.is_empty());
    let source_url = match source_url {
        Some(url) => url,
        None => return Err(io::Error::new(ErrorKind::InvalidInput, "Missing SHEET_CSV_URL")),
    };

    let site_base = env_base
        .or(source.site_base)
        .unwrap_or_else(|| DEFAULT_SITE_BASE.to_string());
    let site_base = site_base.trim().trim_end_matches('/').to_string();

    Ok(Config {
        source_url,
        site_base,
        template_path: paths.template.unwrap_or_else(|| PathBuf::from(DEFAULT_TEMPLATE_PATH)),
        out_dir: paths.out_dir.unwrap_or_else(|| PathBuf::from(DEFAULT_OUT_DIR)),
        log: cfg_file.log,
        sitemap: cfg_file.sitemap,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_source_url() {
        let res = resolve_with_env(None, None, None);
        assert!(res.is_err());
        assert_eq!(res.err().unwrap().to_string(), "Missing SHEET_CSV_URL");
    }

    #[test]
    fn test_env_defaults() {
        let cfg = resolve_with_env(None, Some("https://sheet.example/export?format=csv".to_string()), None).unwrap();
        assert_eq!(cfg.source_url, "https://sheet.example/export?format=csv");
        assert_eq!(cfg.site_base, DEFAULT_SITE_BASE);
        assert_eq!(cfg.template_path, PathBuf::from(DEFAULT_TEMPLATE_PATH));
        assert_eq!(cfg.out_dir, PathBuf::from(DEFAULT_OUT_DIR));
        assert!(cfg.sitemap.is_none());
    }

    #[test]
    fn test_trailing_slash_stripped() {
        let cfg = resolve_with_env(None, Some("https://sheet.example/csv".to_string()), Some("https://staging.example//".to_string())).unwrap();
        assert_eq!(cfg.site_base, "https://staging.example");
    }

    #[test]
    fn test_blank_url_is_missing() {
        let res = resolve_with_env(None, Some("   ".to_string()), None);
        assert!(res.is_err());
    }

    #[test]
    fn test_env_overrides_file() {
        let cfg_file: ConfigFile = toml::from_str(r#"
[source]
csv_url = "https://file.example/csv"
site_base = "https://file.example"

[paths]
template = "tpl/post.html"
out_dir = "out/blog"

[sitemap]
file_name = "sitemap.xml"
"#).unwrap();

        let cfg = resolve_with_env(Some(cfg_file), Some("https://env.example/csv".to_string()), None).unwrap();
        assert_eq!(cfg.source_url, "https://env.example/csv");
        assert_eq!(cfg.site_base, "https://file.example");
        assert_eq!(cfg.template_path, PathBuf::from("tpl/post.html"));
        assert_eq!(cfg.out_dir, PathBuf::from("out/blog"));
        assert_eq!(cfg.sitemap.unwrap().file_name.unwrap(), "sitemap.xml");
    }
}
