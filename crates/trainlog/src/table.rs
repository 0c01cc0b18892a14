//! Fixed-width table rendering for train lists.

use std::io::{self, Write};

use rand::Rng;
use serde_json::Number;

use crate::train::Train;

/// Widths of the number, destination and start time columns.
pub const COLUMN_WIDTHS: [usize; 3] = [15, 30, 25];

/// Column titles.
pub const HEADERS: [&str; 3] = ["Train No.", "Destination", "Departure"];

/// Text shown for a missing destination or start time.
pub const MISSING: &str = "None";

/// Range a placeholder train number is drawn from.
pub const PLACEHOLDER_NUMBERS: std::ops::Range<i64> = 1000..10000;

/// Horizontal rule, e.g. `+-----...-+-----...-+-----...-+`.
#[must_use]
pub fn rule() -> String {
    let mut line = String::from("+");
    for width in COLUMN_WIDTHS {
        line.push_str(&"-".repeat(width + 2));
        line.push('+');
    }
    line
}

/// One table row with every cell centred in its column.
#[must_use]
pub fn row(cells: [&str; 3]) -> String {
    let mut line = String::from("|");
    for (cell, width) in cells.iter().zip(COLUMN_WIDTHS) {
        line.push_str(&format!(" {cell:^width$} |"));
    }
    line
}

/// Cells for one train. A missing number is replaced with a random one.
pub fn cells<R: Rng + ?Sized>(train: &Train, rng: &mut R) -> [String; 3] {
    let num = train.num.as_ref().map_or_else(
        || rng.gen_range(PLACEHOLDER_NUMBERS).to_string(),
        Number::to_string,
    );
    [
        num,
        train.destination.clone().unwrap_or_else(|| MISSING.to_string()),
        train.start_time.clone().unwrap_or_else(|| MISSING.to_string()),
    ]
}

/// Write the full table: rule, header, rule, one row per train, rule.
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn render<'a, R, W>(
    trains: impl IntoIterator<Item = &'a Train>,
    rng: &mut R,
    out: &mut W,
) -> io::Result<()>
where
    R: Rng + ?Sized,
    W: Write + ?Sized,
{
    let line = rule();
    writeln!(out, "{line}")?;
    writeln!(out, "{}", row(HEADERS))?;
    writeln!(out, "{line}")?;
    for train in trains {
        let [num, destination, start_time] = cells(train, rng);
        writeln!(out, "{}", row([&num, &destination, &start_time]))?;
    }
    writeln!(out, "{line}")
}
