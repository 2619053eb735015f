/// Square-root scale from total traffic to a marker radius, so circle area
/// tracks the count.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SqrtScale {
    domain_max: f64,
    range_min: f64,
    range_max: f64,
}

impl SqrtScale {
    pub fn new(domain_max: usize, range_min: f64, range_max: f64) -> Self {
        Self {
            // An all-zero trip set still has to evaluate to something finite
            domain_max: (domain_max as f64).max(1.0),
            range_min,
            range_max,
        }
    }

    /// Marker sizing when every trip is shown.
    pub fn unfiltered(domain_max: usize) -> Self {
        Self::new(domain_max, 0.0, 25.0)
    }

    /// Marker sizing under a time filter. The range is wider on purpose, to
    /// keep the sparser filtered counts legible.
    pub fn filtered(domain_max: usize) -> Self {
        Self::new(domain_max, 3.0, 50.0)
    }

    pub fn eval(&self, total_traffic: usize) -> f64 {
        let t = (total_traffic as f64 / self.domain_max).sqrt();
        self.range_min + t * (self.range_max - self.range_min)
    }
}

/// Quantizes a station's departure share into three buckets: 0.0 for
/// arrival-dominant, 0.5 for balanced, 1.0 for departure-dominant. A station
/// with no traffic at all reads as balanced, never as NaN.
pub fn flow_balance(departures: usize, total_traffic: usize) -> f64 {
    if total_traffic == 0 {
        return 0.5;
    }
    let share = departures as f64 / total_traffic as f64;
    // Even thirds of [0, 1]
    if share < 1.0 / 3.0 {
        0.0
    } else if share < 2.0 / 3.0 {
        0.5
    } else {
        1.0
    }
}
