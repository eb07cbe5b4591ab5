use serde::Serialize;

use crate::sheet::Row;
use crate::text_utils::{parse_tags, title_case};

pub const BLOG_BASE_PATH: &str = "/sr-me/blog";

const FALLBACK_CATEGORY: &str = "blog";
const FALLBACK_EXCERPT: &str = "Blog — Sindikat Studio 83";
const FALLBACK_BODY: &str = "<p>(Sadržaj uskoro.)</p>";

/// The manifest-ready projection of a published sheet row, all defaults
/// applied. Field order here is the field order in posts.json.
#[derive(Serialize)]
pub struct Post {
    pub id: String,
    pub category: String,
    pub badge: String,
    pub title: String,
    pub excerpt: String,
    pub tags: Vec<String>,
    pub img: String,
    pub alt: String,
    #[serde(rename = "popupImg")]
    pub popup_img: String,
    #[serde(rename = "popupAlt")]
    pub popup_alt: String,
    pub url: String,

    // Page content only, never part of the manifest
    #[serde(skip)]
    pub body: String,
}

impl Post {
    /// Applies the inclusion rule and the defaulting policy to one sheet row.
    /// Returns None for rows that are not published or have no id.
    pub fn from_row(row: &Row, site_base: &str) -> Option<Post> {
        let status = row.field("status").to_lowercase();
        if status != "published" {
            return None;
        }

        let id = row.field("id");
        if id.is_empty() {
            return None;
        }

        let category = row.field("category").to_lowercase();
        let category = if category.is_empty() { FALLBACK_CATEGORY.to_string() } else { category };

        let badge = non_empty_or(row.field("badge"), || title_case(&category));
        let title = non_empty_or(row.field("title"), || id.to_string());
        let excerpt = non_empty_or(row.field("excerpt"), || FALLBACK_EXCERPT.to_string());
        let tags = parse_tags(row.field("tags"));

        let img = non_empty_or(row.field("img"), || format!("{}/sr-me/assets/og-cover.jpg", site_base));
        let alt = non_empty_or(row.field("alt"), || title.clone());

        let popup_img = non_empty_or(row.field("popupImg"), || img.clone());
        let popup_alt = non_empty_or(row.field("popupAlt"), || alt.clone());

        let body = non_empty_or(row.field("body"), || FALLBACK_BODY.to_string());

        let url = format!("{}/{}/", BLOG_BASE_PATH, id);

        Some(Post {
            id: id.to_string(),
            category,
            badge,
            title,
            excerpt,
            tags,
            img,
            alt,
            popup_img,
            popup_alt,
            url,
            body,
        })
    }

    pub fn canonical_url(&self, site_base: &str) -> String {
        format!("{}{}", site_base, self.url)
    }
}

fn non_empty_or(value: &str, default: impl FnOnce() -> String) -> String {
    if value.is_empty() {
        default()
    } else {
        value.to_string()
    }
}
