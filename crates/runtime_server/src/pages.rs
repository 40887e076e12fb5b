//! Server-rendered search page.
//!
//! The page shell lives in `static/index.html`; the result area is spliced in
//! at the `<!--@result-->` marker.

use catalog_core::ProductRecord;

const PAGE: &str = include_str!("../static/index.html");
const RESULT_SLOT: &str = "<!--@result-->";

/// What the result area of the page shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchOutcome<'a> {
    /// Plain GET, nothing searched yet
    Idle,
    /// Submitted name matched this record
    Found(&'a ProductRecord),
    /// Submitted name matched nothing
    NotFound,
}

/// Render the full page for `outcome`.
pub fn render(outcome: &SearchOutcome<'_>) -> String {
    PAGE.replace(RESULT_SLOT, &result_fragment(outcome))
}

fn result_fragment(outcome: &SearchOutcome<'_>) -> String {
    match outcome {
        SearchOutcome::Idle => String::new(),
        SearchOutcome::NotFound => r#"        <div class="alert alert-warning mt-3">
            Product not found. Please try another name.
        </div>
"#
        .to_string(),
        SearchOutcome::Found(product) => product_card(product),
    }
}

fn product_card(product: &ProductRecord) -> String {
    let name = escape_html(&product.name);
    let price = escape_html(&product.last_month_price);
    let weight = escape_html(&product.weight);

    format!(
        r#"        <div class="product-card">
            <h4 class="mb-3">{name}</h4>
            <div class="row align-items-center">
                <div class="col-md-6">
                    <p class="lead mb-0">Last Month's Price: <strong>{price} TL</strong></p>
                    <p class="text-muted mb-0">Weight: {weight} kg</p>
                </div>
                <div class="col-md-6 text-end">
                    <form method="POST" action="/confirm" class="d-inline">
                        <input type="hidden" name="product_name" value="{name}">
                        <button type="submit" class="btn btn-success btn-lg">Confirm</button>
                    </form>
                    <a href="/" class="btn btn-outline-secondary btn-lg">New Search</a>
                </div>
            </div>
        </div>
"#
    )
}

/// Escape text for use in HTML element content and quoted attributes.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}
