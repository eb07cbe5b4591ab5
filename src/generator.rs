use std::path::PathBuf;
use std::{fs, io};

use anyhow::{Context, Result};
use spdlog::info;

use crate::config::Config;
use crate::post::Post;
use crate::render::render_page;
use crate::sheet::{fetch_rows, Row};
use crate::sitemap::SitemapIndex;
use crate::writer::{write_manifest, write_page};

pub fn read_template(path: &PathBuf) -> io::Result<String> {
    match fs::read_to_string(path) {
        Ok(content) => Ok(content),
        Err(e) => Err(io::Error::new(e.kind(), format!("Error reading template {}: {}", path.to_string_lossy(), e))),
    }
}

/// The whole run: fetch, render, write. Returns the number of generated
/// posts. Any failure aborts; pages already written stay in place.
pub fn generate(config: &Config) -> Result<usize> {
    let rows = fetch_rows(config.source_url.as_str())?;
    info!("Fetched {} rows from the content sheet", rows.len());

    let template = read_template(&config.template_path)?;

    let posts = render_rows(&rows, template.as_str(), config)?;

    Ok(posts.len())
}

/// Sequential single pass over the rows, one page per published row, then
/// the manifest, then the optional sitemap. Manifest order is row order.
pub fn render_rows(rows: &[Row], template: &str, config: &Config) -> Result<Vec<Post>> {
    let mut posts: Vec<Post> = vec![];

    for row in rows {
        let Some(post) = Post::from_row(row, config.site_base.as_str()) else {
            continue;
        };

        let html = render_page(template, &post, config.site_base.as_str());
        let out_path = write_page(&config.out_dir, post.id.as_str(), html.as_str())
            .with_context(|| format!("Error writing page for post {}", post.id))?;
        info!("Wrote {}", out_path.to_string_lossy());

        posts.push(post);
    }

    let manifest_path = write_manifest(&config.out_dir, &posts)
        .with_context(|| "Error writing posts.json")?;
    info!("Wrote {} with {} posts", manifest_path.to_string_lossy(), posts.len());

    if let Some(ref sitemap) = config.sitemap {
        let index = SitemapIndex {
            site_base: config.site_base.as_str(),
        };
        let xml = index.render(&posts)
            .with_context(|| "Error rendering sitemap")?;

        let file_name = sitemap.file_name.as_deref().unwrap_or("sitemap.xml");
        let out_path = config.out_dir.join(file_name);
        fs::write(&out_path, xml)
            .with_context(|| format!("Error writing {}", out_path.to_string_lossy()))?;
        info!("Wrote {}", out_path.to_string_lossy());
    }

    Ok(posts)
}

#[cfg(test)]
mod tests {
    use crate::config::Sitemap;
    use crate::sheet::parse_rows;
    use crate::test_data::{PAGE_TEMPLATE, SHEET_CSV};

    use super::*;

    fn test_config(out_dir: PathBuf) -> Config {
        Config {
            source_url: "https://sheet.example/csv".to_string(),
            site_base: "https://sindikatstudio83.me".to_string(),
            template_path: PathBuf::from("templates/blog-post-template.html"),
            out_dir,
            log: None,
            sitemap: None,
        }
    }

    #[test]
    fn test_render_rows() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let config = test_config(dir.path().to_path_buf());
        let rows = parse_rows(SHEET_CSV)?;

        let posts = render_rows(&rows, PAGE_TEMPLATE, &config)?;

        // p2 is a draft and the row without an id is dropped
        assert_eq!(posts.len(), 2);
        assert!(dir.path().join("p1").join("index.html").is_file());
        assert!(!dir.path().join("p2").exists());

        let page = fs::read_to_string(dir.path().join("p1").join("index.html"))?;
        assert!(page.contains("<title>Hello &amp; World</title>"));
        assert!(page.contains("<link rel=\"canonical\" href=\"https://sindikatstudio83.me/sr-me/blog/p1/\" />"));
        assert_eq!(page.matches("class=\"chip\"").count(), 3);
        assert!(page.contains("<p>Prvi <b>post</b>.</p>"));

        let manifest: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(dir.path().join("posts.json"))?)?;
        let entries = manifest.as_array().unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0]["id"], "p1");
        assert_eq!(entries[0]["tags"].as_array().unwrap().len(), 4);
        assert_eq!(entries[0]["url"], "/sr-me/blog/p1/");
        assert_eq!(entries[1]["id"], "treci");

        Ok(())
    }

    #[test]
    fn test_render_rows_deterministic() -> Result<()> {
        let rows = parse_rows(SHEET_CSV)?;

        let dir_a = tempfile::tempdir()?;
        let dir_b = tempfile::tempdir()?;
        render_rows(&rows, PAGE_TEMPLATE, &test_config(dir_a.path().to_path_buf()))?;
        render_rows(&rows, PAGE_TEMPLATE, &test_config(dir_b.path().to_path_buf()))?;

        let page_a = fs::read_to_string(dir_a.path().join("p1").join("index.html"))?;
        let page_b = fs::read_to_string(dir_b.path().join("p1").join("index.html"))?;
        assert_eq!(page_a, page_b);

        let manifest_a = fs::read_to_string(dir_a.path().join("posts.json"))?;
        let manifest_b = fs::read_to_string(dir_b.path().join("posts.json"))?;
        assert_eq!(manifest_a, manifest_b);

        Ok(())
    }

    #[test]
    fn test_render_rows_sitemap() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let mut config = test_config(dir.path().to_path_buf());
        config.sitemap = Some(Sitemap { file_name: None });

        let posts = render_rows(&parse_rows(SHEET_CSV)?, PAGE_TEMPLATE, &config)?;

        let xml = fs::read_to_string(dir.path().join("sitemap.xml"))?;
        assert_eq!(xml.matches("<url>").count(), posts.len());
        assert!(xml.contains("<loc>https://sindikatstudio83.me/sr-me/blog/p1/</loc>"));

        Ok(())
    }

    #[test]
    fn test_missing_template() {
        let res = read_template(&PathBuf::from("no/such/template.html"));
        assert!(res.is_err());
        assert!(res.err().unwrap().to_string().contains("no/such/template.html"));
    }
}
