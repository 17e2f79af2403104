//! Text helpers for rendering listings.

/// Escape text for safe embedding in HTML.
pub fn encode_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            '/' => out.push_str("&#x2F;"),
            _ => out.push(c),
        }
    }
    out
}

/// Whole-pound price with en-GB digit grouping, e.g. `£750,000`.
pub fn format_price(price: u64) -> String {
    let digits = price.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    format!("£{}", grouped)
}

pub fn bedrooms_label(bedrooms: u32) -> String {
    if bedrooms == 1 {
        "1 bedroom".to_string()
    } else {
        format!("{} bedrooms", bedrooms)
    }
}

/// First `max_chars` characters followed by `...`; shorter text is returned as is.
pub fn excerpt(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => format!("{}...", &text[..idx]),
        None => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_html_neutralizes_tags() {
        let safe = encode_html("<script>bad code</script>");
        assert!(!safe.contains("<script>"));
        assert!(!safe.contains("</script>"));
        assert_eq!(safe, "&lt;script&gt;bad code&lt;&#x2F;script&gt;");
        assert_eq!(encode_html(""), "");
        assert_eq!(encode_html(r#"Tom & "Jerry's""#), "Tom &amp; &quot;Jerry&#x27;s&quot;");
    }

    #[test]
    fn price_formatting() {
        assert_eq!(format_price(300000), "£300,000");
        assert_eq!(format_price(750000), "£750,000");
        assert_eq!(format_price(1500), "£1,500");
        assert_eq!(format_price(1200000), "£1,200,000");
        assert_eq!(format_price(999), "£999");
        assert_eq!(format_price(0), "£0");
    }

    #[test]
    fn bedroom_labels() {
        assert_eq!(bedrooms_label(1), "1 bedroom");
        assert_eq!(bedrooms_label(0), "0 bedrooms");
        assert_eq!(bedrooms_label(3), "3 bedrooms");
    }

    #[test]
    fn excerpt_is_char_safe() {
        assert_eq!(excerpt("short", 100), "short");
        assert_eq!(excerpt("abcdef", 3), "abc...");
        assert_eq!(excerpt("£££££", 2), "££...");
        assert_eq!(excerpt("abc", 3), "abc");
    }
}
