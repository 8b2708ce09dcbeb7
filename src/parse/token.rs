//! Anti-forgery token lookup.

use scraper::{Html, Selector};
use std::sync::LazyLock;

use super::static_selector;

static CSRF_INPUT_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| static_selector("input[name='csrf_token']"));

/// Returns the `value` of the first `csrf_token` input on the page.
///
/// A missing input, or one without a `value` attribute, yields `None`; the
/// submission then goes out without a token and the portal decides.
pub fn extract_csrf_token(html: &str) -> Option<String> {
    let document = Html::parse_document(html);
    let token = document
        .select(&CSRF_INPUT_SELECTOR)
        .next()
        .and_then(|input| input.value().attr("value"))
        .map(str::to_string);

    log::debug!("Anti-forgery token present: {}", token.is_some());
    token
}
