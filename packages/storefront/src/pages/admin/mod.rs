//! Admin pages

mod wishlist;

pub use wishlist::*;
