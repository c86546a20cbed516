//! Request extractors that gate handlers, plus response fix-ups.
//!
//! - [`auth::AuthUser`] -- the authenticated caller, resolved from a Bearer
//!   token, a live session row and the current user record.
//! - [`timeout::timeout_json_body`] -- gives timed-out requests a JSON body.

pub mod auth;
pub mod timeout;
