//! Core record types for trainlog.
//!
//! A [`Train`] is one departure record; a [`TrainList`] is the ordered
//! sequence of records held in memory for the duration of one command.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};

/// A single train departure record.
///
/// Every field is optional because stored documents are only required to
/// match the schema, which does not make any field mandatory. Keys the tool
/// does not know about are kept in `extra` so a rewrite does not drop them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Train {
    /// Train number. Not required to be unique.
    ///
    /// Kept as a JSON number so that anything the schema accepts as an
    /// integer (`1.0`, values past `i64::MAX`) loads and is written back
    /// unchanged.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub num: Option<Number>,

    /// Destination, free text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destination: Option<String>,

    /// Departure time, free text. Compared as a plain string.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_time: Option<String>,

    /// Any other keys present in the stored object.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Train {
    /// Create a fully populated record.
    #[must_use]
    pub fn new(
        num: impl Into<Number>,
        destination: impl Into<String>,
        start_time: impl Into<String>,
    ) -> Self {
        Self {
            num: Some(num.into()),
            destination: Some(destination.into()),
            start_time: Some(start_time.into()),
            extra: Map::new(),
        }
    }

    /// Check whether this train goes to `destination`.
    ///
    /// The stored destination is trimmed before comparing; the argument is
    /// not. Matching is exact and case-sensitive.
    #[must_use]
    pub fn goes_to(&self, destination: &str) -> bool {
        self.destination
            .as_deref()
            .is_some_and(|d| d.trim() == destination)
    }

    /// Order two trains by departure time. Missing times sort first.
    #[must_use]
    pub fn cmp_start_time(&self, other: &Self) -> Ordering {
        self.start_time.cmp(&other.start_time)
    }
}

/// The ordered list of trains for one file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TrainList {
    trains: Vec<Train>,
}

impl TrainList {
    /// Create an empty list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a train, re-sorting by departure time when the list holds
    /// more than one record.
    pub fn add(&mut self, train: Train) {
        self.trains.push(train);
        if self.trains.len() > 1 {
            self.sort_by_start_time();
        }
    }

    /// Stable sort by departure time.
    pub fn sort_by_start_time(&mut self) {
        self.trains.sort_by(Train::cmp_start_time);
    }

    /// Trains whose trimmed destination equals `destination` exactly.
    #[must_use]
    pub fn select_destination(&self, destination: &str) -> Vec<&Train> {
        self.trains.iter().filter(|t| t.goes_to(destination)).collect()
    }

    /// Check whether the list is ordered by departure time.
    #[must_use]
    pub fn is_sorted_by_start_time(&self) -> bool {
        self.trains
            .windows(2)
            .all(|w| w[0].cmp_start_time(&w[1]) != Ordering::Greater)
    }

    /// Iterate over the trains in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Train> {
        self.trains.iter()
    }

    /// Number of trains.
    #[must_use]
    pub fn len(&self) -> usize {
        self.trains.len()
    }

    /// Check if the list is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.trains.is_empty()
    }

    /// Borrow the trains as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[Train] {
        &self.trains
    }
}

impl From<Vec<Train>> for TrainList {
    fn from(trains: Vec<Train>) -> Self {
        Self { trains }
    }
}

impl<'a> IntoIterator for &'a TrainList {
    type Item = &'a Train;
    type IntoIter = std::slice::Iter<'a, Train>;

    fn into_iter(self) -> Self::IntoIter {
        self.trains.iter()
    }
}
