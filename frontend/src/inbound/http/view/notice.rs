//! Inline status notices.
//!
//! Error and success notices fade out after a fixed delay; the delay is
//! carried in a data attribute and applied by the stylesheet in the layout.

use super::html::push_escaped;

/// Notice flavour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    /// A failed action; dismissed after five seconds.
    Error,
    /// A completed action; dismissed after three seconds.
    Success,
    /// Persistent information.
    Info,
}

impl NoticeKind {
    /// Auto-dismiss delay in milliseconds, if any.
    pub const fn dismiss_after_ms(self) -> Option<u32> {
        match self {
            Self::Error => Some(5_000),
            Self::Success => Some(3_000),
            Self::Info => None,
        }
    }

    fn class(self) -> &'static str {
        match self {
            Self::Error => "notice error-message",
            Self::Success => "notice success-message",
            Self::Info => "notice info-message",
        }
    }
}

/// A message shown above page content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    /// Flavour.
    pub kind: NoticeKind,
    /// Plain text; escaped when rendered.
    pub message: String,
}

impl Notice {
    /// Error notice.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            message: message.into(),
        }
    }

    /// Success notice.
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            message: message.into(),
        }
    }

    /// Informational notice.
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Info,
            message: message.into(),
        }
    }
}

/// Render a notice.
///
/// # Examples
/// ```
/// use frontend::inbound::http::view::{Notice, render_notice};
///
/// let html = render_notice(&Notice::error("Please fill in all fields"));
/// assert!(html.contains(r#"data-dismiss-after-ms="5000""#));
/// ```
pub fn render_notice(notice: &Notice) -> String {
    let mut out = String::new();
    out.push_str(r#"<div class=""#);
    out.push_str(notice.kind.class());
    out.push('"');
    if notice.kind == NoticeKind::Error {
        out.push_str(r#" role="alert""#);
    } else {
        out.push_str(r#" role="status""#);
    }
    if let Some(ms) = notice.kind.dismiss_after_ms() {
        out.push_str(&format!(r#" data-dismiss-after-ms="{ms}""#));
    }
    out.push('>');
    push_escaped(&mut out, &notice.message);
    out.push_str("</div>");
    out
}

#[cfg(test)]
mod tests {
    //! Regression coverage for notice rendering.

    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Notice::error("x"), Some("5000"))]
    #[case(Notice::success("x"), Some("3000"))]
    #[case(Notice::info("x"), None)]
    fn dismiss_delay_depends_on_kind(#[case] notice: Notice, #[case] delay: Option<&str>) {
        let html = render_notice(&notice);
        match delay {
            Some(ms) => assert!(html.contains(&format!(r#"data-dismiss-after-ms="{ms}""#))),
            None => assert!(!html.contains("data-dismiss-after-ms")),
        }
    }

    #[rstest]
    fn message_is_escaped() {
        let html = render_notice(&Notice::error("<img src=x>"));
        assert!(html.contains("&lt;img src=x&gt;"));
        assert!(!html.contains("<img"));
    }
}
