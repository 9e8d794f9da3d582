//! Login, registration and review forms plus the sign-in guard.
//!
//! Password fields are never echoed back; other values are re-filled after a
//! failed submission.

use crate::domain::{MIN_COMMENT_CHARS, RATING_MAX, RATING_MIN};

use super::html::{escape, place_href, query_value};

/// Message shown while the guard page waits to redirect.
pub(crate) const AUTH_REQUIRED_MESSAGE: &str =
    "You must be logged in to add a review. Redirecting to login...";

/// Re-fill values for the login form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginFormView<'a> {
    /// Previously entered email.
    pub email: &'a str,
    /// Safe local path to return to after login.
    pub redirect: Option<&'a str>,
}

/// Render the login form.
pub fn render_login_form(view: &LoginFormView<'_>) -> String {
    let redirect = view
        .redirect
        .map(|target| {
            format!(
                r#"<input type="hidden" name="redirect" value="{}">"#,
                escape(target)
            )
        })
        .unwrap_or_default();
    format!(
        concat!(
            r#"<section class="form-container"><h1>Login</h1>"#,
            r#"<form id="login-form" method="post" action="/login.html">{redirect}"#,
            r#"<label for="email">Email</label>"#,
            r#"<input type="email" id="email" name="email" value="{email}" required>"#,
            r#"<label for="password">Password</label>"#,
            r#"<input type="password" id="password" name="password" required>"#,
            r#"<button type="submit" class="login-button">Login</button></form>"#,
            r#"<p>No account yet? <a href="/register.html">Register</a></p></section>"#,
        ),
        redirect = redirect,
        email = escape(view.email),
    )
}

/// Re-fill values for the registration form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegisterFormView<'a> {
    /// Previously entered given name.
    pub first_name: &'a str,
    /// Previously entered family name.
    pub last_name: &'a str,
    /// Previously entered email.
    pub email: &'a str,
}

/// Render the registration form.
pub fn render_register_form(view: &RegisterFormView<'_>) -> String {
    format!(
        concat!(
            r#"<section class="form-container"><h1>Register</h1>"#,
            r#"<form id="register-form" method="post" action="/register.html">"#,
            r#"<label for="first_name">First name</label>"#,
            r#"<input type="text" id="first_name" name="first_name" value="{first}" required>"#,
            r#"<label for="last_name">Last name</label>"#,
            r#"<input type="text" id="last_name" name="last_name" value="{last}" required>"#,
            r#"<label for="email">Email</label>"#,
            r#"<input type="email" id="email" name="email" value="{email}" required>"#,
            r#"<label for="password">Password</label>"#,
            r#"<input type="password" id="password" name="password" required>"#,
            r#"<button type="submit" class="login-button">Register</button></form>"#,
            r#"<p>Already registered? <a href="/login.html">Login</a></p></section>"#,
        ),
        first = escape(view.first_name),
        last = escape(view.last_name),
        email = escape(view.email),
    )
}

/// Context and re-fill values for the review form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewFormView<'a> {
    /// Place being reviewed.
    pub place_id: &'a str,
    /// Place title, when it could be loaded.
    pub place_title: Option<&'a str>,
    /// Previously entered comment.
    pub comment: &'a str,
    /// Previously selected rating.
    pub rating: Option<u8>,
}

/// Render the review form.
pub fn render_review_form(view: &ReviewFormView<'_>) -> String {
    let heading = match view.place_title {
        Some(title) => format!("Reviewing: {}", escape(title)),
        None => "Add a review".to_owned(),
    };
    let mut options = String::from(r#"<option value="">Select a rating</option>"#);
    for value in RATING_MIN..=RATING_MAX {
        let marker = if view.rating == Some(value) { " selected" } else { "" };
        options.push_str(&format!(r#"<option value="{value}"{marker}>{value}</option>"#));
    }
    let action = escape(&format!(
        "/add_review.html?id={}",
        query_value(view.place_id)
    ));
    format!(
        concat!(
            r#"<section class="form-container" id="review-form-container">"#,
            r#"<h1 id="place-title">{heading}</h1>"#,
            r#"<form id="review-form" method="post" action="{action}">"#,
            r#"<label for="rating">Rating</label>"#,
            r#"<select id="rating" name="rating" required>{options}</select>"#,
            r#"<label for="comment">Review</label>"#,
            r#"<textarea id="comment" name="comment" minlength="{min}" required>{comment}</textarea>"#,
            r#"<button type="submit" class="details-button">Submit Review</button></form>"#,
            r#"<p><a href="{back}">Back to place</a></p></section>"#,
        ),
        heading = heading,
        action = action,
        options = options,
        min = MIN_COMMENT_CHARS,
        comment = escape(view.comment),
        back = place_href(view.place_id),
    )
}

/// Body of the guard page shown to anonymous visitors of the review form.
pub fn render_auth_required(login_url: &str) -> String {
    format!(
        r#"<section class="form-container"><p>{AUTH_REQUIRED_MESSAGE}</p><p><a href="{}">Continue to login</a></p></section>"#,
        escape(login_url)
    )
}
