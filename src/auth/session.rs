//! Authenticated shop session.

use crate::config::ShopDomain;

/// The shop and access token every request is sent with.
///
/// # Example
///
/// ```rust
/// use shopify_draft_orders::{Session, ShopDomain};
///
/// let session = Session::new(ShopDomain::new("my-store").unwrap(), "shpat_123");
///
/// assert_eq!(session.shop.as_ref(), "my-store.myshopify.com");
/// assert_eq!(session.access_token, "shpat_123");
/// ```
#[derive(Clone, Debug)]
pub struct Session {
    /// The shop this session is for.
    pub shop: ShopDomain,

    /// Sent as `X-Shopify-Access-Token`.
    pub access_token: String,
}

impl Session {
    #[must_use]
    pub fn new(shop: ShopDomain, access_token: impl Into<String>) -> Self {
        Self {
            shop,
            access_token: access_token.into(),
        }
    }
}

const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Session>();
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_carries_shop_and_token() {
        let session = Session::new(ShopDomain::new("shop").unwrap(), String::from("token"));

        assert_eq!(session.shop.as_ref(), "shop.myshopify.com");
        assert_eq!(session.access_token, "token");
    }
}
