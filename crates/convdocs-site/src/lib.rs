//! Static site generation for convdocs: the home page, one page per rule,
//! and a not-found page, all sharing the sidebar layout.

pub mod assets;
pub mod commands;
pub mod components;
pub mod error;
pub mod generate;
pub mod site;
pub mod watch;

pub use commands::Status;
pub use error::{Result, SiteError};
pub use generate::{generate, BuildReport};
pub use site::Site;
