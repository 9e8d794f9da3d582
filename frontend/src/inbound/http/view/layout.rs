//! Shared page chrome: head, navigation, notices and footer.

use super::html::{escape, push_escaped};
use super::notice::{Notice, render_notice};

const NOTICE_STYLE: &str = concat!(
    ".notice[data-dismiss-after-ms=\"5000\"]{animation:notice-dismiss 0s 5s forwards}",
    ".notice[data-dismiss-after-ms=\"3000\"]{animation:notice-dismiss 0s 3s forwards}",
    "@keyframes notice-dismiss{to{visibility:hidden;height:0;margin:0;padding:0}}",
    ".place-card[hidden]{display:none}",
);

/// Navigation state derived from the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavState {
    /// No live session: offer the login link.
    Anonymous,
    /// Live session: offer logout, show the email when known.
    SignedIn {
        /// Signed-in user's email.
        email: Option<String>,
    },
    /// Session state unknown, as on error pages.
    Neutral,
}

/// Client-side refresh to another location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Refresh {
    /// Delay before navigating.
    pub after_secs: u32,
    /// Target path.
    pub location: String,
}

/// A full HTML document.
///
/// # Examples
/// ```
/// use frontend::inbound::http::view::{NavState, Page};
///
/// let html = Page::new("Login", NavState::Anonymous, "<form></form>").render();
/// assert!(html.starts_with("<!DOCTYPE html>"));
/// assert!(html.contains(r#"id="login-link""#));
/// ```
#[derive(Debug, Clone)]
pub struct Page {
    title: String,
    nav: NavState,
    notices: Vec<Notice>,
    body: String,
    refresh: Option<Refresh>,
}

impl Page {
    /// Page with a title, navigation state and pre-rendered body.
    pub fn new(title: impl Into<String>, nav: NavState, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            nav,
            notices: Vec::new(),
            body: body.into(),
            refresh: None,
        }
    }

    /// Show a notice above the body.
    #[must_use]
    pub fn with_notice(mut self, notice: Notice) -> Self {
        self.notices.push(notice);
        self
    }

    /// Show a notice when one is supplied.
    #[must_use]
    pub fn with_optional_notice(self, notice: Option<Notice>) -> Self {
        match notice {
            Some(notice) => self.with_notice(notice),
            None => self,
        }
    }

    /// Navigate to `location` after `after_secs` seconds.
    #[must_use]
    pub fn with_refresh(mut self, after_secs: u32, location: impl Into<String>) -> Self {
        self.refresh = Some(Refresh {
            after_secs,
            location: location.into(),
        });
        self
    }

    /// Render the document.
    pub fn render(&self) -> String {
        let mut out = String::from(
            "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
             <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n<title>",
        );
        push_escaped(&mut out, &self.title);
        out.push_str(" | HBnB</title>\n");
        if let Some(refresh) = &self.refresh {
            out.push_str(&format!(
                "<meta http-equiv=\"refresh\" content=\"{};url={}\">\n",
                refresh.after_secs,
                escape(&refresh.location)
            ));
        }
        out.push_str("<style>");
        out.push_str(NOTICE_STYLE);
        out.push_str("</style>\n</head>\n<body>\n<header>\n");
        out.push_str("<a href=\"/index.html\" class=\"logo\">HBnB</a>\n");
        out.push_str(&render_nav(&self.nav));
        out.push_str("</header>\n<main>\n");
        for notice in &self.notices {
            out.push_str(&render_notice(notice));
            out.push('\n');
        }
        out.push_str(&self.body);
        out.push_str("\n</main>\n<footer><p>All rights reserved. HBnB</p></footer>\n");
        out.push_str("</body>\n</html>\n");
        out
    }
}

fn render_nav(nav: &NavState) -> String {
    let mut out = String::from("<nav id=\"nav\">");
    out.push_str("<a href=\"/index.html\">Home</a>");
    match nav {
        NavState::Anonymous => {
            out.push_str(r#"<a href="/login.html" class="login-button" id="login-link">Login</a>"#);
        }
        NavState::SignedIn { email } => {
            if let Some(email) = email {
                out.push_str(r#"<span class="user-email">"#);
                push_escaped(&mut out, email);
                out.push_str("</span>");
            }
            out.push_str(r#"<a href="/logout" class="login-button" id="logout-link">Logout</a>"#);
        }
        NavState::Neutral => {}
    }
    out.push_str("</nav>\n");
    out
}
