/// Build the shareable link for an invoice.
///
/// The path shape is consumed by the public invoice route and must stay
/// exactly `<origin>/invoice/<id>/text`.
pub fn share_link(origin: &str, invoice_id: &str) -> String {
    format!("{}/invoice/{}/text", origin.trim_end_matches('/'), invoice_id)
}

/// Truncate a string to a maximum number of characters for display.
pub fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max.saturating_sub(3)).collect();
        format!("{}...", truncated)
    }
}
