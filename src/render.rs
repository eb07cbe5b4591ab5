use crate::post::Post;
use crate::text_utils::escape_html;

const MAX_TAG_CHIPS: usize = 3;

/// Fills the placeholder tokens of the page template with one post.
///
/// This is a plain ordered find-and-replace, kept bit-compatible with the
/// existing site templates. Tokens missing from the template are ignored,
/// and any template text that happens to match a token gets replaced too.
/// The body is substituted verbatim (the sheet is trusted for that one
/// column), everything else is escaped.
pub fn render_page(template: &str, post: &Post, site_base: &str) -> String {
    let canonical = post.canonical_url(site_base);

    template
        .replace("{{TITLE}}", &escape_html(&post.title))
        .replace("{{H1}}", &escape_html(&post.title))
        .replace("{{DESCRIPTION}}", &escape_html(&post.excerpt))
        .replace("{{CANONICAL}}", &escape_html(&canonical))
        .replace("{{OG_IMAGE}}", &escape_html(&post.popup_img))
        .replace("{{HERO_IMAGE}}", &escape_html(&post.popup_img))
        .replace("{{HERO_ALT}}", &escape_html(&post.popup_alt))
        .replace("{{BADGE}}", &escape_html(&post.badge))
        .replace("{{POST_ID}}", &escape_html(&post.id))
        .replace("{{CONTENT}}", &post.body)
        .replace("{{TAGS_CHIPS}}", &tag_chips(&post.tags))
}

/// One chip per tag, first three only. The manifest keeps the full list.
pub fn tag_chips(tags: &[String]) -> String {
    tags.iter()
        .take(MAX_TAG_CHIPS)
        .map(|t| format!("<span class=\"chip\">{}</span>", escape_html(t)))
        .collect::<Vec<_>>()
        .join("\n")
}
