//! Locale-aware fake value synthesis.
//!
//! Every synthesizer is a plain function over a [`RandomSource`], so the same
//! seed always yields the same values regardless of which request or thread
//! asks for them.
//!
//! - [`random`] - The seedable random source
//! - [`person`] - Names, e-mail addresses, phone numbers
//! - [`address`] - Street, city, state, postal code, country
//! - [`commerce`] - SKUs, product names, categories, prices, colors
//! - [`company`] - Company names, catch phrases, bs
//! - [`date`] - Dates relative to a reference instant

pub mod address;
pub mod commerce;
pub mod company;
pub mod date;
pub mod locales;
pub mod person;
pub mod random;

pub use random::RandomSource;
