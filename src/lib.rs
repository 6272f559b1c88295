pub mod app;
pub mod cli;
pub mod domain;
pub mod error;
pub mod services;

pub use app::App;
pub use cli::Cli;
pub use error::{Error, Result};
