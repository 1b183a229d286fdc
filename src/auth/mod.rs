//! Credentials used to authenticate Admin API calls.
//!
//! Obtaining an access token (OAuth, token exchange) happens elsewhere; this
//! crate only needs the shop and the token that came out of that flow.

mod session;

pub use session::Session;
