//! Built-in HTML page renderer
//!
//! Each page is assembled from a shared layout with a navbar and a flash
//! banner slot. Contexts arrive as JSON; every interpolated value goes
//! through [`escape_html`] before it reaches the markup.

use serde_json::Value as JsonValue;
use tracing::error;

use super::ViewRenderer;

const STYLE: &str = "body{font-family:sans-serif;margin:0;color:#222}nav{background:#344e41;padding:.75rem 1.5rem}nav a{color:#fff;margin-right:1rem;text-decoration:none}main{max-width:56rem;margin:1.5rem auto;padding:0 1rem}.alert{padding:.75rem 1rem;border-radius:4px;margin-bottom:1rem}.alert.success{background:#d8f3dc;color:#1b4332}.alert.error{background:#ffe5e5;color:#9d0208}.campground-card{border:1px solid #ddd;border-radius:6px;padding:1rem;margin-bottom:1rem}.campground-card img,.campground img{max-width:100%;border-radius:4px}form.inline{display:inline}label{display:block;margin-top:.75rem;font-weight:600}input,textarea,select{width:100%;max-width:24rem;padding:.4rem;margin-top:.25rem}button{margin-top:1rem;padding:.5rem 1rem;background:#344e41;color:#fff;border:0;border-radius:4px;cursor:pointer}.review{border-top:1px solid #eee;padding:.75rem 0}";

/// Renderer producing the application's server-side pages.
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlPages;

impl HtmlPages {
    /// Create the renderer
    pub fn new() -> Self {
        Self
    }
}

impl ViewRenderer for HtmlPages {
    fn render(&self, template: &str, context: &JsonValue) -> String {
        match template {
            "home" => home(context),
            "campgrounds/index" => index(context),
            "campgrounds/new" => new_form(context),
            "campgrounds/show" => show(context),
            "campgrounds/edit" => edit_form(context),
            "error" => error_page(context),
            other => {
                error!(template = other, "unknown template requested");
                error_page(&serde_json::json!({
                    "status": 500,
                    "message": "Oh No, Something went wrong!",
                }))
            }
        }
    }
}

/// Escape text for interpolation into HTML content or attribute values
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn field<'a>(value: &'a JsonValue, name: &str) -> &'a str {
    value[name].as_str().unwrap_or("")
}

fn flash_banner(context: &JsonValue) -> String {
    let Some(flash) = context.get("flash").filter(|f| !f.is_null()) else {
        return String::new();
    };
    let class = match field(flash, "kind") {
        "error" => "alert error",
        _ => "alert success",
    };
    let message = escape_html(field(flash, "message"));
    format!("<div class=\"{class}\">{message}</div>\n")
}

fn layout(title: &str, flash: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title} | Campboard</title>
<style>{style}</style>
</head>
<body>
<nav><a href="/">Campboard</a><a href="/campgrounds">Campgrounds</a><a href="/campgrounds/new">New Campground</a></nav>
<main>
{flash}{body}
</main>
</body>
</html>
"#,
        title = escape_html(title),
        style = STYLE,
    )
}

fn home(context: &JsonValue) -> String {
    let body = r#"<section class="hero">
<h1>Welcome to Campboard</h1>
<p>Browse community-listed campgrounds, or add your own and collect reviews.</p>
<p><a href="/campgrounds">View Campgrounds</a></p>
</section>"#;
    layout("Home", &flash_banner(context), body)
}

fn index(context: &JsonValue) -> String {
    let mut cards = String::new();
    if let Some(campgrounds) = context["campgrounds"].as_array() {
        for campground in campgrounds {
            let id = escape_html(field(campground, "id"));
            let title = escape_html(field(campground, "title"));
            let location = escape_html(field(campground, "location"));
            let image = escape_html(field(campground, "image"));
            cards.push_str(&format!(
                r#"<article class="campground-card">
<img src="{image}" alt="{title}">
<h2>{title}</h2>
<p>{location}</p>
<p><a href="/campgrounds/{id}">View {title}</a></p>
</article>
"#
            ));
        }
    }
    let body = format!(
        r#"<h1>All Campgrounds</h1>
<p><a href="/campgrounds/new">Add Campground</a></p>
{cards}"#
    );
    layout("All Campgrounds", &flash_banner(context), &body)
}

fn new_form(context: &JsonValue) -> String {
    let body = r#"<h1>New Campground</h1>
<form action="/campgrounds" method="POST" class="campground-form">
<label for="title">Title</label>
<input type="text" name="campground[title]" id="title" required>
<label for="location">Location</label>
<input type="text" name="campground[location]" id="location" required>
<label for="image">Image URL</label>
<input type="text" name="campground[image]" id="image" required>
<label for="price">Campground Price</label>
<input type="text" name="campground[price]" id="price" placeholder="0.00" required>
<label for="description">Description</label>
<textarea name="campground[description]" id="description" rows="4" required></textarea>
<button type="submit">Add Campground</button>
</form>"#;
    layout("New Campground", &flash_banner(context), body)
}

fn show(context: &JsonValue) -> String {
    let campground = &context["campground"];
    let id = escape_html(field(campground, "id"));
    let title = escape_html(field(campground, "title"));
    let location = escape_html(field(campground, "location"));
    let image = escape_html(field(campground, "image"));
    let description = escape_html(field(campground, "description"));
    let price = campground["price"].as_f64().unwrap_or(0.0);

    let mut review_items = String::new();
    if let Some(reviews) = context["reviews"].as_array() {
        for review in reviews {
            let review_id = escape_html(field(review, "id"));
            let review_body = escape_html(field(review, "body"));
            let rating = review["rating"].as_u64().unwrap_or(0);
            review_items.push_str(&format!(
                r#"<article class="review">
<p class="rating">Rating: {rating}/5</p>
<p>{review_body}</p>
<form class="inline" action="/campgrounds/{id}/reviews/{review_id}" method="POST">
<input type="hidden" name="_method" value="DELETE">
<button type="submit">Delete</button>
</form>
</article>
"#
            ));
        }
    }

    let body = format!(
        r#"<article class="campground">
<img src="{image}" alt="{title}">
<h1>{title}</h1>
<p class="location">{location}</p>
<p class="price">${price}/night</p>
<p>{description}</p>
<p><a href="/campgrounds/{id}/edit">Edit</a></p>
<form class="inline" action="/campgrounds/{id}" method="POST">
<input type="hidden" name="_method" value="DELETE">
<button type="submit">Delete Campground</button>
</form>
</article>
<section class="reviews">
<h2>Leave a Review</h2>
<form action="/campgrounds/{id}/reviews" method="POST">
<label for="rating">Rating</label>
<select name="review[rating]" id="rating">
<option value="1">1</option>
<option value="2">2</option>
<option value="3">3</option>
<option value="4">4</option>
<option value="5">5</option>
</select>
<label for="body">Review</label>
<textarea name="review[body]" id="body" rows="3" required></textarea>
<button type="submit">Submit</button>
</form>
<h2>Reviews</h2>
{review_items}
</section>"#
    );
    layout(
        campground["title"].as_str().unwrap_or("Campground"),
        &flash_banner(context),
        &body,
    )
}

fn edit_form(context: &JsonValue) -> String {
    let campground = &context["campground"];
    let id = escape_html(field(campground, "id"));
    let title = escape_html(field(campground, "title"));
    let location = escape_html(field(campground, "location"));
    let image = escape_html(field(campground, "image"));
    let description = escape_html(field(campground, "description"));
    let price = campground["price"].as_f64().unwrap_or(0.0);

    let body = format!(
        r#"<h1>Edit Campground</h1>
<form action="/campgrounds/{id}" method="POST" class="campground-form">
<input type="hidden" name="_method" value="PUT">
<label for="title">Title</label>
<input type="text" name="campground[title]" id="title" value="{title}" required>
<label for="location">Location</label>
<input type="text" name="campground[location]" id="location" value="{location}" required>
<label for="image">Image URL</label>
<input type="text" name="campground[image]" id="image" value="{image}" required>
<label for="price">Campground Price</label>
<input type="text" name="campground[price]" id="price" value="{price}" required>
<label for="description">Description</label>
<textarea name="campground[description]" id="description" rows="4" required>{description}</textarea>
<button type="submit">Update Campground</button>
</form>
<p><a href="/campgrounds/{id}">Back to Campground</a></p>"#
    );
    layout("Edit Campground", &flash_banner(context), &body)
}

fn error_page(context: &JsonValue) -> String {
    let status = context["status"].as_u64().unwrap_or(500);
    let message = escape_html(
        context["message"]
            .as_str()
            .unwrap_or("Oh No, Something went wrong!"),
    );
    let body = format!(
        r#"<section class="error">
<h1>{message}</h1>
<p>HTTP {status}</p>
<p><a href="/campgrounds">Back to Campgrounds</a></p>
</section>"#
    );
    layout("Error", "", &body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_escape_html_covers_markup_characters() {
        assert_eq!(
            escape_html(r#"<b>"fish" & 'chips'</b>"#),
            "&lt;b&gt;&quot;fish&quot; &amp; &#39;chips&#39;&lt;/b&gt;"
        );
        assert_eq!(escape_html("plain text"), "plain text");
    }

    #[test]
    fn test_index_lists_every_campground() {
        let html = HtmlPages::new().render(
            "campgrounds/index",
            &json!({
                "campgrounds": [
                    { "id": "a1", "title": "Maple Ridge", "location": "Bend, Oregon", "image": "https://example.com/1.jpg" },
                    { "id": "b2", "title": "Cedar Hollow", "location": "Moab, Utah", "image": "https://example.com/2.jpg" },
                ],
                "flash": null,
            }),
        );

        assert!(html.contains("Maple Ridge"));
        assert!(html.contains("Cedar Hollow"));
        assert!(html.contains(r#"href="/campgrounds/a1""#));
        assert!(html.contains(r#"href="/campgrounds/b2""#));
        assert!(html.contains(r#"href="/campgrounds/new""#));
    }

    #[test]
    fn test_show_escapes_interpolated_values() {
        let html = HtmlPages::new().render(
            "campgrounds/show",
            &json!({
                "campground": {
                    "id": "a1",
                    "title": "<script>alert(1)</script>",
                    "location": "Bend, Oregon",
                    "image": "https://example.com/1.jpg",
                    "description": "Pines & creek",
                    "price": 25.0,
                },
                "reviews": [
                    { "id": "r1", "body": "<img src=x onerror=alert(2)>", "rating": 4 },
                ],
                "flash": null,
            }),
        );

        assert!(!html.contains("<script>alert(1)</script>"));
        assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
        assert!(html.contains("&lt;img src=x onerror=alert(2)&gt;"));
        assert!(html.contains("Pines &amp; creek"));
        assert!(html.contains("$25/night"));
        assert!(html.contains("Rating: 4/5"));
    }

    #[test]
    fn test_show_carries_review_forms() {
        let html = HtmlPages::new().render(
            "campgrounds/show",
            &json!({
                "campground": { "id": "a1", "title": "Maple Ridge", "location": "", "image": "", "description": "", "price": 25.0 },
                "reviews": [ { "id": "r1", "body": "Fine", "rating": 3 } ],
                "flash": null,
            }),
        );

        assert!(html.contains(r#"action="/campgrounds/a1/reviews""#));
        assert!(html.contains(r#"action="/campgrounds/a1/reviews/r1""#));
        assert!(html.contains(r#"name="review[rating]""#));
        assert!(html.contains(r#"name="review[body]""#));
        assert!(html.contains(r#"name="_method" value="DELETE""#));
    }

    #[test]
    fn test_flash_banner_kinds() {
        let pages = HtmlPages::new();

        let success = pages.render(
            "campgrounds/index",
            &json!({ "campgrounds": [], "flash": { "kind": "success", "message": "Successfully made a new campground!" } }),
        );
        assert!(success.contains(r#"<div class="alert success">Successfully made a new campground!</div>"#));

        let error = pages.render(
            "campgrounds/index",
            &json!({ "campgrounds": [], "flash": { "kind": "error", "message": "Cannot find that campground!" } }),
        );
        assert!(error.contains(r#"<div class="alert error">Cannot find that campground!</div>"#));

        let none = pages.render("campgrounds/index", &json!({ "campgrounds": [], "flash": null }));
        assert!(!none.contains(r#"<div class="alert"#));
    }

    #[test]
    fn test_new_form_posts_nested_fields() {
        let html = HtmlPages::new().render("campgrounds/new", &json!({ "flash": null }));

        assert!(html.contains(r#"action="/campgrounds" method="POST""#));
        for name in ["title", "location", "image", "price", "description"] {
            assert!(html.contains(&format!(r#"name="campground[{name}]""#)));
        }
    }

    #[test]
    fn test_edit_form_prefills_and_overrides_method() {
        let html = HtmlPages::new().render(
            "campgrounds/edit",
            &json!({
                "campground": {
                    "id": "a1",
                    "title": "Maple Ridge",
                    "location": "Bend, Oregon",
                    "image": "https://example.com/1.jpg",
                    "description": "Pines and a cold creek",
                    "price": 19.5,
                },
                "flash": null,
            }),
        );

        assert!(html.contains(r#"action="/campgrounds/a1" method="POST""#));
        assert!(html.contains(r#"name="_method" value="PUT""#));
        assert!(html.contains(r#"value="Maple Ridge""#));
        assert!(html.contains(r#"value="19.5""#));
        assert!(html.contains(">Pines and a cold creek</textarea>"));
    }

    #[test]
    fn test_error_page_shows_status_and_message() {
        let html = HtmlPages::new().render(
            "error",
            &json!({ "status": 404, "message": "Page Not Found" }),
        );

        assert!(html.contains("<h1>Page Not Found</h1>"));
        assert!(html.contains("HTTP 404"));
    }

    #[test]
    fn test_unknown_template_falls_back_to_error_page() {
        let html = HtmlPages::new().render("no/such/page", &json!({}));
        assert!(html.contains("Oh No, Something went wrong!"));
        assert!(html.contains("HTTP 500"));
    }
}
