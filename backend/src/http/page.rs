//! The HTML status page.

const INDEX_TEMPLATE: &str = include_str!("index.html");

const REFRESH_PLACEHOLDER: &str = "{{refresh_ms}}";

/// Status page with its poll interval filled in.
pub fn render_index(refresh_seconds: u64) -> String {
    let refresh_ms = refresh_seconds.max(1).saturating_mul(1000);
    INDEX_TEMPLATE.replace(REFRESH_PLACEHOLDER, &refresh_ms.to_string())
}
