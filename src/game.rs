pub use config::*;
pub use entry::*;
pub use models::*;

mod config;
mod entry;
mod models;
