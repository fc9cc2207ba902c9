//! Public-facing pages

mod cart;
mod home;
mod login;
mod orders;
mod payment;
mod wishlist;

pub use cart::*;
pub use home::*;
pub use login::*;
pub use orders::*;
pub use payment::*;
pub use wishlist::*;
