//! Pure HTML view functions.
//!
//! Every function maps already-fetched domain data to a string and escapes
//! all interpolated text. No function here performs I/O or reads the session.

mod forms;
mod html;
mod layout;
mod notice;
mod place_details;
mod places;

pub use forms::{
    LoginFormView, RegisterFormView, ReviewFormView, render_auth_required, render_login_form,
    render_register_form, render_review_form,
};
#[cfg(test)]
pub(crate) use forms::AUTH_REQUIRED_MESSAGE;
pub use html::escape;
pub(crate) use html::query_value;
pub use layout::{NavState, Page, Refresh};
pub use notice::{Notice, NoticeKind, render_notice};
pub use place_details::{render_amenities, render_place_details, render_reviews, render_stars};
pub use places::{render_place_card, render_place_list, render_price_filter};
