#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate)]
//! ** Starlight Utils **
//! Small stateless helpers: URL slugs, HTML stripping, initials, ages,
//! "none of" sequence predicates and async stream collection.

pub const STARLIGHT_VERSION: &str = env!("CARGO_PKG_VERSION");

// Utility modules
pub mod age;
pub mod error;
pub mod seq;
pub mod slug;
pub mod stream;
pub mod text;

// Command-line front end for the `starlight` binary
pub mod cli;

// Re-exports for convenience
pub use age::{age_at, age_at_today, age_at_today_utc, age_on, age_today, age_today_utc};
pub use error::{Result, UtilsError};
pub use seq::{NoneExt, none, none_match};
pub use slug::{DEFAULT_MAX_LENGTH, is_slug, slugify, slugify_with_max};
pub use stream::{StreamListExt, to_list_async};
pub use text::{TextExt, initials, remove_html};
