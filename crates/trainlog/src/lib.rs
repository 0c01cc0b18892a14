//! `trainlog` - Manage a list of train departures stored as JSON
//!
//! This library provides the record types, schema-checked persistence and
//! the `add`, `display` and `select` operations behind the `trains` binary.

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod prompt;
pub mod storage;
pub mod table;
pub mod train;

pub use app::App;
pub use config::Config;
pub use error::{Error, Result};
pub use logging::init_logging;
pub use prompt::Prompter;
pub use storage::Storage;
pub use train::{Train, TrainList};
