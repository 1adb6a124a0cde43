//! Site components

mod cards;
mod footer;
mod plans;

pub use cards::*;
pub use footer::Footer;
pub use plans::*;
