//! Route definitions for the application

use dioxus::prelude::*;

use crate::components::Shell;
use crate::flows::payment::CallbackQuery;
use crate::pages::admin::AdminWishlist;
use crate::pages::public::{Cart, Home, Login, Orders, PaymentCallback, Wishlist};
use crate::platform::BaseNavigator;

/// All application routes
#[derive(Clone, Debug, PartialEq, Routable)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Shell)]
        #[route("/")]
        Home {},

        #[route("/login")]
        Login {},

        #[route("/cart")]
        Cart {},

        #[route("/wishlist")]
        Wishlist {},

        #[route("/orders")]
        Orders {},

        // Gateway return URL: trackId, success, status, paymentId
        #[route("/payment/callback?:..query")]
        PaymentCallback { query: CallbackQuery },

        #[route("/admin/wishlist/:user_id")]
        AdminWishlist { user_id: i64 },
}

/// Where a flow may send the user. Flows name a destination; the UI layer
/// maps it onto a concrete [`Route`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Destination {
    Home,
    Orders,
    Cart,
}

impl From<Destination> for Route {
    fn from(to: Destination) -> Self {
        match to {
            Destination::Home => Route::Home {},
            Destination::Orders => Route::Orders {},
            Destination::Cart => Route::Cart {},
        }
    }
}

/// Navigates through the Dioxus router.
pub struct RouterNavigator(pub Navigator);

impl BaseNavigator for RouterNavigator {
    fn navigate(&self, to: Destination) {
        tracing::debug!(?to, "Navigating");
        self.0.push(Route::from(to));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_callback_route_parses_gateway_query() {
        let route: Route = "/payment/callback?success=1&status=2&trackId=trk-9"
            .parse()
            .unwrap();

        match route {
            Route::PaymentCallback { query } => {
                assert_eq!(query.track_id.as_deref(), Some("trk-9"));
                assert_eq!(query.success.as_deref(), Some("1"));
            }
            other => panic!("unexpected route {:?}", other),
        }
    }

    #[test]
    fn test_destinations_map_to_routes() {
        assert_eq!(Route::from(Destination::Orders).to_string(), "/orders");
        assert_eq!(Route::from(Destination::Cart).to_string(), "/cart");
        assert_eq!(Route::from(Destination::Home).to_string(), "/");
    }
}
