//! Domain entities.
//!
//! All generated records serialize in camelCase to match the HTTP contract.

pub mod address;
pub mod company;
pub mod file_entry;
pub mod product;
pub mod user;

pub use address::Address;
pub use company::Company;
pub use file_entry::{DirectoryListing, EntryKind, FileContent, FileEntry, FileLookup};
pub use product::Product;
pub use user::User;
