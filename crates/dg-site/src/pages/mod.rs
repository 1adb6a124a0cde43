//! Site pages

mod checkout;
mod home;

pub use checkout::CheckoutPage;
pub use home::HomePage;
