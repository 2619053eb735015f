use anyhow::Result;

use bluebikes::Trip;

/// Minutes either side of the target that still match.
const WINDOW_MINUTES: u16 = 60;

/// Restricts trips by time of day. The time slider speaks in raw integers
/// (-1 for "show everything", otherwise minutes since midnight), decoded once
/// at the edge by `from_control`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimeFilter {
    None,
    /// Trips starting or ending within an hour of this minute-of-day.
    Near(u16),
}

impl TimeFilter {
    pub fn from_control(value: i32) -> Result<Self> {
        match value {
            -1 => Ok(Self::None),
            0..=1439 => Ok(Self::Near(value as u16)),
            _ => bail!("Time control value {value} out of range [-1, 1439]"),
        }
    }

    pub fn matches(&self, trip: &Trip) -> bool {
        match self {
            TimeFilter::None => true,
            // The distance is deliberately flat, not circular: minute 1430 is
            // far from minute 10, even though they're 20 minutes apart on a
            // 24-hour clock.
            TimeFilter::Near(target) => {
                minute_diff(trip.start_minutes(), *target) <= WINDOW_MINUTES
                    || minute_diff(trip.end_minutes(), *target) <= WINDOW_MINUTES
            }
        }
    }

    /// The matching subsequence, in input order.
    pub fn apply<'a>(&self, trips: &'a [Trip]) -> Vec<&'a Trip> {
        trips.iter().filter(|t| self.matches(t)).collect()
    }
}

fn minute_diff(a: u16, b: u16) -> u16 {
    if a > b {
        a - b
    } else {
        b - a
    }
}
