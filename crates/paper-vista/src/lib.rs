//! paper-vista
//!
//! A terminal data browser for paper collections. Loads a `{ "papers": [...] }`
//! payload once, then filters by title, citations and year range, paginates
//! the result as cards with expandable abstracts, and exports the filtered
//! set.
//!
//! # Example
//!
//! ```no_run
//! use paper_vista::{config::Config, controller::Controller, loader};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env()?;
//!     let mut controller = Controller::new(&config);
//!     controller.on_loaded(loader::load_papers(&config).await);
//!     println!("{}", controller.screen());
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod controller;
pub mod error;
pub mod export;
pub mod filter;
pub mod loader;
pub mod models;
pub mod pagination;
pub mod render;
pub mod view;

pub use config::Config;
pub use controller::{Controller, Event};
pub use error::{ExportError, LoadError};
pub use view::ViewState;
