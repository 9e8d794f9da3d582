//! Text escaping for HTML bodies and attribute values.

/// Escape `& < > " '` so text is inert in both element and attribute
/// context.
///
/// # Examples
/// ```
/// use frontend::inbound::http::view::escape;
///
/// assert_eq!(escape(r#"<b a="1">Tom & Jerry's</b>"#),
///     "&lt;b a=&quot;1&quot;&gt;Tom &amp; Jerry&#39;s&lt;/b&gt;");
/// ```
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    push_escaped(&mut out, text);
    out
}

/// Append `text` to `out` with markup characters escaped.
pub(crate) fn push_escaped(out: &mut String, text: &str) {
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
}

/// Percent-encode one query-string value.
pub(crate) fn query_value(raw: &str) -> String {
    url::form_urlencoded::byte_serialize(raw.as_bytes()).collect()
}

/// `href` for the details page of `place_id`, already attribute-escaped.
pub(crate) fn place_href(place_id: &str) -> String {
    escape(&format!("/place.html?id={}", query_value(place_id)))
}

#[cfg(test)]
mod tests {
    //! Regression coverage for escaping helpers.

    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("plain", "plain")]
    #[case("<script>alert(1)</script>", "&lt;script&gt;alert(1)&lt;/script&gt;")]
    #[case("\" onmouseover='x'", "&quot; onmouseover=&#39;x&#39;")]
    #[case("Café & Crème", "Café &amp; Crème")]
    fn escapes_markup(#[case] raw: &str, #[case] expected: &str) {
        assert_eq!(escape(raw), expected);
    }

    #[rstest]
    fn place_links_encode_the_identifier() {
        assert_eq!(place_href("a&b c"), "/place.html?id=a%26b+c");
    }
}
