//! Helper functions for inbound text handling

/// Name used when the sender has no usable profile name
pub const DEFAULT_DISPLAY_NAME: &str = "Cliente";

/// Strip surrounding whitespace from an inbound message body
pub fn normalize_body(body: &str) -> &str {
    body.trim()
}

/// First word of the sender's profile name, or [`DEFAULT_DISPLAY_NAME`]
pub fn display_name(profile_name: Option<&str>) -> String {
    profile_name
        .and_then(|name| name.split_whitespace().next())
        .unwrap_or(DEFAULT_DISPLAY_NAME)
        .to_string()
}

/// Shorten text for log fields
pub fn truncate_text(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        text.to_string()
    } else {
        let truncated: String = text.chars().take(max_chars.saturating_sub(3)).collect();
        format!("{}...", truncated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_name() {
        assert_eq!(display_name(Some("Maria da Silva")), "Maria");
        assert_eq!(display_name(Some("  João ")), "João");
        assert_eq!(display_name(Some("   ")), "Cliente");
        assert_eq!(display_name(None), "Cliente");
    }

    #[test]
    fn test_normalize_body() {
        assert_eq!(normalize_body("  menu \n"), "menu");
        assert_eq!(normalize_body(""), "");
    }

    #[test]
    fn test_truncate_text() {
        assert_eq!(truncate_text("Não liga", 20), "Não liga");
        assert_eq!(truncate_text("Máquina de lavar", 8), "Máqui...");
    }
}
