//! Quote reference numbers.

use chrono::{Datelike, Local, NaiveDate};
use rand::Rng;

/// Build the reference for a given date and suffix: `FBC-{day}{month}-{n}`.
///
/// Day and month are unpadded and the suffix is only two digits, so the
/// format is not globally unique — two quotes generated on the same day can
/// collide. Known weakness, carried over deliberately; downstream systems
/// must not key on it.
pub fn reference_for(date: NaiveDate, suffix: u8) -> String {
    format!("FBC-{}{}-{}", date.day(), date.month(), suffix)
}

/// Generate a session reference from today's local date and a random 0-99
/// suffix.
pub fn generate_reference() -> String {
    let suffix = rand::thread_rng().gen_range(0..100);
    reference_for(Local::now().date_naive(), suffix)
}
