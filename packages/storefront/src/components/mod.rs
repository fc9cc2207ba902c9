//! Reusable UI components

mod cart_line;
mod countdown;
mod header;
mod loading;
mod price;
mod shell;
mod wishlist_card;

pub use cart_line::*;
pub use countdown::*;
pub use header::*;
pub use loading::*;
pub use price::*;
pub use shell::*;
pub use wishlist_card::*;
