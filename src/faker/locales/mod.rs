//! Locale word lists used by the field synthesizers.

pub mod en;
