#[cfg(test)]
pub const SHEET_CSV: &str = "id,status,category,badge,title,excerpt,tags,img,alt,popupImg,popupAlt,body
p1,Published,,,Hello & World,,\"a, b, c, d\",,,,,<p>Prvi <b>post</b>.</p>
p2,draft
,published,,,Bez ID
treci,published
";

#[cfg(test)]
pub const PAGE_TEMPLATE: &str = r#"<!doctype html>
<html lang="sr-ME">
<head>
<meta charset="utf-8" />
<title>{{TITLE}}</title>
<meta name="description" content="{{DESCRIPTION}}" />
<link rel="canonical" href="{{CANONICAL}}" />
<meta property="og:image" content="{{OG_IMAGE}}" />
</head>
<body data-post="{{POST_ID}}">
<article>
  <span class="badge">{{BADGE}}</span>
  <h1>{{H1}}</h1>
  <img src="{{HERO_IMAGE}}" alt="{{HERO_ALT}}" />
  <div class="chips">
{{TAGS_CHIPS}}
  </div>
  {{CONTENT}}
</article>
</body>
</html>
"#;
