//! The `add`, `display` and `select` operations.
//!
//! Each operation loads the whole train list, works on it in memory and, for
//! `add` only, writes the whole list back.

use std::io::Write;
use std::path::Path;

use rand::Rng;
use tracing::{debug, info};

use crate::config::Config;
use crate::error::Result;
use crate::storage::Storage;
use crate::table;
use crate::train::{Train, TrainList};

/// Operations over train list files, sharing one configuration.
#[derive(Debug, Clone)]
pub struct App {
    config: Config,
}

impl App {
    /// Create an app with the given configuration.
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Get the active configuration.
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Storage handle for `path`.
    #[must_use]
    pub fn storage(&self, path: impl AsRef<Path>) -> Storage {
        Storage::new(path, &self.config.storage)
    }

    /// Append `train` to the list at `path`, keep it ordered by departure
    /// time and save it.
    ///
    /// Returns the list as written.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidData`] if the existing file fails
    /// validation; nothing is written in that case.
    pub fn add(
        &self,
        path: impl AsRef<Path>,
        train: Train,
        out: &mut impl Write,
    ) -> Result<TrainList> {
        let storage = self.storage(path);
        let mut trains = storage.load_required(out)?;

        debug!(
            "Adding train {:?} to {} ({} existing)",
            train.num,
            storage.path().display(),
            trains.len()
        );
        trains.add(train);
        storage.save(&trains)?;
        Ok(trains)
    }

    /// Print the list at `path` as a table. Read-only.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidData`] if the file fails validation,
    /// or any load or write error.
    pub fn display<R: Rng + ?Sized>(
        &self,
        path: impl AsRef<Path>,
        rng: &mut R,
        out: &mut impl Write,
    ) -> Result<()> {
        let trains = self.storage(path).load_required(out)?;
        table::render(&trains, rng, out)?;
        Ok(())
    }

    /// Trains at `path` whose trimmed destination equals `destination`.
    ///
    /// Nothing is printed; callers decide whether to show the result.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidData`] if the file fails validation,
    /// or any load error.
    pub fn select(
        &self,
        path: impl AsRef<Path>,
        destination: &str,
        out: &mut impl Write,
    ) -> Result<Vec<Train>> {
        let storage = self.storage(path);
        let trains = storage.load_required(out)?;
        let selected: Vec<Train> = trains
            .select_destination(destination)
            .into_iter()
            .cloned()
            .collect();

        info!(
            "{} of {} trains in {} go to {destination:?}",
            selected.len(),
            trains.len(),
            storage.path().display()
        );
        Ok(selected)
    }

    /// Like [`App::select`], then print the matches with the `display`
    /// table.
    ///
    /// # Errors
    ///
    /// Returns any error from [`App::select`], or a write error.
    pub fn select_shown<R: Rng + ?Sized>(
        &self,
        path: impl AsRef<Path>,
        destination: &str,
        rng: &mut R,
        out: &mut impl Write,
    ) -> Result<Vec<Train>> {
        let selected = self.select(path, destination, out)?;
        table::render(&selected, rng, out)?;
        Ok(selected)
    }
}
