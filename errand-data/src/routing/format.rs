//! Human-readable distance and duration text for route legs.

const METRES_PER_KILOMETRE: u64 = 1_000;
const SECONDS_PER_MINUTE: u64 = 60;
const MINUTES_PER_HOUR: u64 = 60;

/// Render a distance in metres, switching to kilometres from 1 km.
///
/// # Examples
///
/// ```
/// use errand_data::routing::format_distance;
///
/// assert_eq!(format_distance(850), "850 m");
/// assert_eq!(format_distance(12_345), "12.3 km");
/// ```
#[must_use]
#[expect(
    clippy::float_arithmetic,
    clippy::cast_precision_loss,
    reason = "kilometres are shown to one decimal place"
)]
pub fn format_distance(meters: u64) -> String {
    if meters < METRES_PER_KILOMETRE {
        format!("{meters} m")
    } else {
        format!("{:.1} km", meters as f64 / 1_000.0)
    }
}

/// Render a duration in seconds as rounded minutes and hours.
///
/// Durations round to the nearest minute and never show less than one.
///
/// # Examples
///
/// ```
/// use errand_data::routing::format_duration;
///
/// assert_eq!(format_duration(20), "1 min");
/// assert_eq!(format_duration(2_520), "42 mins");
/// assert_eq!(format_duration(3_900), "1 hour 5 mins");
/// ```
#[must_use]
pub fn format_duration(seconds: u64) -> String {
    let minutes = seconds
        .saturating_add(SECONDS_PER_MINUTE.div_euclid(2))
        .div_euclid(SECONDS_PER_MINUTE)
        .max(1);
    let hours = minutes.div_euclid(MINUTES_PER_HOUR);
    let remainder = minutes.rem_euclid(MINUTES_PER_HOUR);

    match (hours, remainder) {
        (0, _) => plural(minutes, "min"),
        (_, 0) => plural(hours, "hour"),
        _ => format!("{} {}", plural(hours, "hour"), plural(remainder, "min")),
    }
}

fn plural(count: u64, unit: &str) -> String {
    if count == 1 {
        format!("{count} {unit}")
    } else {
        format!("{count} {unit}s")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0, "0 m")]
    #[case(850, "850 m")]
    #[case(999, "999 m")]
    #[case(1_000, "1.0 km")]
    #[case(12_345, "12.3 km")]
    fn distances(#[case] meters: u64, #[case] expected: &str) {
        assert_eq!(format_distance(meters), expected);
    }

    #[rstest]
    #[case(0, "1 min")]
    #[case(89, "1 min")]
    #[case(90, "2 mins")]
    #[case(2_520, "42 mins")]
    #[case(3_600, "1 hour")]
    #[case(3_900, "1 hour 5 mins")]
    #[case(7_260, "2 hours 1 min")]
    fn durations(#[case] seconds: u64, #[case] expected: &str) {
        assert_eq!(format_duration(seconds), expected);
    }
}
