//! Local redirect targets taken from query strings and forms.

use crate::inbound::http::view::query_value;

/// Where successful logins land without an explicit target.
pub const DEFAULT_LANDING: &str = "/index.html";

/// Accept `raw` only when it names a path on this site.
///
/// Rejects empty values, protocol-relative (`//host`) and backslash forms,
/// and anything carrying a scheme.
///
/// # Examples
/// ```
/// use frontend::inbound::http::redirect::safe_local_redirect;
///
/// assert_eq!(safe_local_redirect("/place.html?id=1"), Some("/place.html?id=1"));
/// assert_eq!(safe_local_redirect("https://evil.test/"), None);
/// assert_eq!(safe_local_redirect("//evil.test"), None);
/// ```
pub fn safe_local_redirect(raw: &str) -> Option<&str> {
    let target = raw.trim();
    let local = target.starts_with('/')
        && !target.starts_with("//")
        && !target.contains('\\')
        && !target.chars().any(char::is_control)
        && !target
            .split(['?', '#'])
            .next()
            .is_some_and(|path| path.contains(':'));
    local.then_some(target)
}

/// Login page URL that returns to `origin` afterwards.
pub fn login_url(origin: &str) -> String {
    match safe_local_redirect(origin) {
        Some(target) => format!("/login.html?redirect={}", query_value(target)),
        None => "/login.html".to_owned(),
    }
}
