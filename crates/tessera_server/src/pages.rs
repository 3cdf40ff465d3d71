//! Server-rendered marketing pages.
//!
//! Plain HTML with inline styles. Catalog text is escaped on the way in;
//! division and product templates show a status badge unless the offering
//! is live.

use crate::AppState;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::routing::get;
use axum::Router;
use tessera_core::{LaunchStatus, escape_html};

const STYLE: &str = r#"<style>
body { font-family: system-ui, sans-serif; margin: 0; color: #1f2937; }
header { background: #0f172a; padding: 16px 32px; display: flex; gap: 24px; align-items: center; }
header a { color: #e2e8f0; text-decoration: none; }
header .brand { font-weight: 700; font-size: 20px; color: #ffffff; }
main { max-width: 960px; margin: 0 auto; padding: 32px; }
.grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(260px, 1fr)); gap: 16px; }
.card { border: 1px solid #e5e7eb; border-radius: 12px; padding: 20px; }
.badge { display: inline-block; background: #fef3c7; color: #92400e; border-radius: 999px; padding: 2px 10px; font-size: 12px; margin-left: 8px; }
.muted { color: #6b7280; }
footer { text-align: center; padding: 24px; color: #6b7280; font-size: 14px; }
</style>"#;

/// Build the page router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(home_page))
        .route("/about", get(about_page))
        .route("/contact", get(contact_page))
        .route("/divisions/:slug", get(division_page))
        .route("/products/:slug", get(product_page))
        .route("/waitlist", get(waitlist_page))
        .route("/blog", get(blog_page))
        .route("/blog/:id", get(article_page))
        .route("/faq", get(faq_page))
}

/// Status badge markup; empty for live offerings.
pub fn status_badge(status: LaunchStatus) -> String {
    status
        .badge()
        .map(|label| format!(r#"<span class="badge">{}</span>"#, label))
        .unwrap_or_default()
}

fn shell(state: &AppState, title: &str, body: &str) -> String {
    let company = state.catalog().company();
    let nav: String = state
        .catalog()
        .divisions()
        .iter()
        .map(|division| {
            format!(
                r#"<a href="/divisions/{}">{}</a>"#,
                escape_html(&division.slug),
                escape_html(&division.name)
            )
        })
        .collect();
    let blog_link = if state.config().settings().features.blog_enabled {
        r#"<a href="/blog">Blog</a>"#
    } else {
        ""
    };
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head><meta charset="utf-8"><meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title} | {brand}</title>
{style}
</head>
<body>
<header><a class="brand" href="/">{brand}</a>{nav}<a href="/waitlist">Waitlist</a>{blog}<a href="/faq">FAQ</a><a href="/about">About</a><a href="/contact">Contact</a></header>
<main>
{body}
</main>
<footer>&copy; {brand}. {tagline}</footer>
</body>
</html>"#,
        title = escape_html(title),
        brand = escape_html(company.name()),
        tagline = escape_html(company.tagline()),
        style = STYLE,
        nav = nav,
        blog = blog_link,
        body = body,
    )
}

/// Wrap `body` in the site shell, or the maintenance notice when enabled.
fn page(state: &AppState, title: &str, body: &str) -> Response {
    if state.config().settings().features.maintenance_mode {
        let notice = "<h1>Down for maintenance</h1>\
                      <p class=\"muted\">We're making improvements and will be back shortly.</p>";
        return (
            StatusCode::SERVICE_UNAVAILABLE,
            Html(shell(state, "Maintenance", notice)),
        )
            .into_response();
    }
    Html(shell(state, title, body)).into_response()
}

fn not_found(state: &AppState, what: &str) -> Response {
    let body = format!(
        "<h1>Page not found</h1><p class=\"muted\">We couldn't find {}.</p><p><a href=\"/\">Back to home</a></p>",
        escape_html(what)
    );
    let mut response = page(state, "Not Found", &body);
    if response.status() == StatusCode::OK {
        *response.status_mut() = StatusCode::NOT_FOUND;
    }
    response
}

/// Fallback for unmatched paths.
pub async fn fallback(State(state): State<AppState>) -> Response {
    not_found(&state, "that page")
}

fn list_items(items: &[String]) -> String {
    let lis: String = items
        .iter()
        .map(|item| format!("<li>{}</li>", escape_html(item)))
        .collect();
    format!("<ul>{}</ul>", lis)
}

async fn home_page(State(state): State<AppState>) -> Response {
    let catalog = state.catalog();
    let company = catalog.company();
    let mut body = format!(
        "<h1>{}</h1><p class=\"muted\">{}</p><h2>Our divisions</h2><div class=\"grid\">",
        escape_html(company.name()),
        escape_html(company.tagline())
    );
    body.extend(catalog.divisions().iter().map(|division| {
        format!(
            r#"<div class="card"><h3><a href="/divisions/{}">{}</a>{}</h3><p>{}</p></div>"#,
            escape_html(&division.slug),
            escape_html(&division.name),
            status_badge(division.status),
            escape_html(&division.tagline)
        )
    }));
    body.push_str("</div>");

    if state.config().settings().features.blog_enabled {
        body.push_str("<h2>Featured insights</h2><div class=\"grid\">");
        body.extend(catalog.featured_articles().into_iter().map(|article| {
            format!(
                r#"<div class="card"><h3><a href="/blog/{}">{}</a></h3><p class="muted">{} &middot; {} min read</p><p>{}</p></div>"#,
                article.id,
                escape_html(&article.title),
                escape_html(&article.author),
                article.read_time_minutes,
                escape_html(&article.excerpt)
            )
        }));
        body.push_str("</div>");
    }
    page(&state, "Home", &body)
}

async fn about_page(State(state): State<AppState>) -> Response {
    let company = state.catalog().company();
    let body = format!(
        "<h1>About {name}</h1><p>{mission}</p>\
         <p class=\"muted\">Founded {founded} &middot; Headquartered in {hq}</p>",
        name = escape_html(company.name()),
        mission = escape_html(company.mission()),
        founded = company.founded(),
        hq = escape_html(company.headquarters()),
    );
    page(&state, "About", &body)
}

async fn contact_page(State(state): State<AppState>) -> Response {
    let body = r#"<h1>Contact us</h1>
<p class="muted">Send us a message and we'll reply within one business day.</p>
<form method="post" action="/api/contact" class="card">
<p><label>Name <input name="name" required></label></p>
<p><label>Email <input name="email" type="email" required></label></p>
<p><label>Subject <input name="subject" required></label></p>
<p><label>Message <textarea name="message" rows="5" required></textarea></label></p>
<p><button type="submit">Send message</button></p>
</form>"#;
    page(&state, "Contact", body)
}

async fn division_page(State(state): State<AppState>, Path(slug): Path<String>) -> Response {
    let catalog = state.catalog();
    let Ok(division) = catalog.division(&slug) else {
        return not_found(&state, "that division");
    };

    let mut body = format!(
        "<h1>{}{}</h1><p class=\"muted\">{}</p><p>{}</p><h2>Features</h2>{}<h2>Benefits</h2>{}",
        escape_html(&division.name),
        status_badge(division.status),
        escape_html(&division.tagline),
        escape_html(&division.description),
        list_items(&division.features),
        list_items(&division.benefits)
    );

    let mut products = catalog.products_for(&division.slug).peekable();
    if products.peek().is_some() {
        body.push_str("<h2>Products</h2><div class=\"grid\">");
        body.extend(products.map(|product| {
            format!(
                r#"<div class="card"><h3><a href="/products/{}">{}</a>{}</h3><p>{}</p></div>"#,
                escape_html(&product.slug),
                escape_html(&product.name),
                status_badge(product.status),
                escape_html(&product.tagline)
            )
        }));
        body.push_str("</div>");
    }
    page(&state, &division.name, &body)
}

async fn product_page(State(state): State<AppState>, Path(slug): Path<String>) -> Response {
    let catalog = state.catalog();
    let Ok(product) = catalog.product(&slug) else {
        return not_found(&state, "that product");
    };
    let division_link = catalog
        .division(&product.division)
        .map(|d| {
            format!(
                r#"<p class="muted">Part of <a href="/divisions/{}">{}</a></p>"#,
                escape_html(&d.slug),
                escape_html(&d.name)
            )
        })
        .unwrap_or_default();
    let pricing = product
        .pricing
        .as_deref()
        .map(|p| format!("<h2>Pricing</h2><p>{}</p>", escape_html(p)))
        .unwrap_or_default();
    let cta = if product.status == LaunchStatus::Live {
        String::from(r#"<p><a href="/contact">Talk to us</a></p>"#)
    } else {
        String::from(r#"<p><a href="/waitlist">Join the waitlist</a></p>"#)
    };

    let body = format!(
        "<h1>{}{}</h1>{}<p class=\"muted\">{}</p><p>{}</p><h2>Features</h2>{}{}{}",
        escape_html(&product.name),
        status_badge(product.status),
        division_link,
        escape_html(&product.tagline),
        escape_html(&product.description),
        list_items(&product.features),
        pricing,
        cta
    );
    page(&state, &product.name, &body)
}

async fn waitlist_page(State(state): State<AppState>) -> Response {
    let mut body = String::from(
        "<h1>Coming soon</h1><p class=\"muted\">Be the first to know when these launch.</p><div class=\"grid\">",
    );
    body.extend(state.catalog().waitlist().iter().map(|item| {
        format!(
            r#"<div class="card"><h3>{}</h3><p class="muted">{} &middot; Expected {}</p><p>{}</p>{}</div>"#,
            escape_html(&item.name),
            escape_html(&item.subtitle),
            escape_html(&item.expected_launch),
            escape_html(&item.description),
            list_items(&item.features)
        )
    }));
    body.push_str("</div>");

    if state.config().settings().features.waitlist_enabled {
        body.push_str(
            r#"<form method="post" action="/api/waitlist" class="card">
<p><label>Name <input name="name"></label></p>
<p><label>Email <input name="email" type="email" required></label></p>
<p><label>Product <input name="product" required></label></p>
<p><button type="submit">Join the waitlist</button></p>
</form>"#,
        );
    } else {
        body.push_str("<p class=\"muted\">Waitlist signups are currently closed.</p>");
    }
    page(&state, "Waitlist", &body)
}

async fn blog_page(State(state): State<AppState>) -> Response {
    if !state.config().settings().features.blog_enabled {
        return not_found(&state, "the blog");
    }
    let mut articles: Vec<_> = state.catalog().articles().iter().collect();
    articles.sort_by(|a, b| b.date.cmp(&a.date));

    let mut body = String::from("<h1>Insights</h1><div class=\"grid\">");
    body.extend(articles.into_iter().map(|article| {
        format!(
            r#"<div class="card"><p class="muted">{}</p><h3><a href="/blog/{}">{}</a></h3><p>{}</p><p class="muted">{} &middot; {} &middot; {} min read</p></div>"#,
            escape_html(&article.category),
            article.id,
            escape_html(&article.title),
            escape_html(&article.excerpt),
            escape_html(&article.author),
            article.date.format("%B %-d, %Y"),
            article.read_time_minutes
        )
    }));
    body.push_str("</div>");
    page(&state, "Blog", &body)
}

async fn article_page(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    if !state.config().settings().features.blog_enabled {
        return not_found(&state, "the blog");
    }
    let article = id
        .parse::<u32>()
        .ok()
        .and_then(|id| state.catalog().article(id).ok());
    let Some(article) = article else {
        return not_found(&state, "that article");
    };
    let body = format!(
        "<p class=\"muted\">{}</p><h1>{}</h1><p class=\"muted\">By {} &middot; {} &middot; {} min read</p><p>{}</p><p><a href=\"/blog\">All articles</a></p>",
        escape_html(&article.category),
        escape_html(&article.title),
        escape_html(&article.author),
        article.date.format("%B %-d, %Y"),
        article.read_time_minutes,
        escape_html(&article.excerpt)
    );
    page(&state, &article.title, &body)
}

async fn faq_page(State(state): State<AppState>) -> Response {
    let mut categories: Vec<&str> = Vec::new();
    for faq in state.catalog().faqs() {
        if !categories.contains(&faq.category.as_str()) {
            categories.push(&faq.category);
        }
    }

    let mut body = String::from("<h1>Frequently asked questions</h1>");
    for category in categories {
        body.push_str(&format!("<h2>{}</h2>", escape_html(category)));
        body.extend(
            state
                .catalog()
                .faqs()
                .iter()
                .filter(|f| f.category == category)
                .map(|faq| {
                    format!(
                        "<details class=\"card\"><summary>{}</summary><p>{}</p></details>",
                        escape_html(&faq.question),
                        escape_html(&faq.answer)
                    )
                }),
        );
    }
    page(&state, "FAQ", &body)
}
