use chrono::{DateTime, NaiveDate, NaiveDateTime, SecondsFormat, TimeZone, Utc};
use serde::{Serialize, Serializer};

/// Calendar date used when a form date is joined with a form time.
pub const CALENDAR_DATE_FORMAT: &str = "%Y-%m-%d";

/// Twelve-hour clock shown in the schedule editors, e.g. `09:30 AM`.
pub const CLOCK_TIME_FORMAT: &str = "%I:%M %p";

const NAIVE_DATE_TIME_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

const JOINED_DATE_TIME_FORMATS: [&str; 4] = [
    "%Y-%m-%d %I:%M %p",
    "%Y-%m-%d %I:%M:%S %p",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%d %H:%M:%S",
];

/// A parsed point in time, or the marker left behind by a value that
/// could not be parsed.
///
/// Invalid values are carried instead of reported so a single bad field
/// never discards the rest of a record. Callers check [`Timestamp::is_valid`]
/// before relying on the instant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Timestamp {
    Valid(DateTime<Utc>),
    Invalid,
}

impl Timestamp {
    /// Permissive parse of an API timestamp.
    ///
    /// Accepts RFC 3339, naive `YYYY-MM-DD[T ]HH:MM[:SS[.fff]]` and bare
    /// `YYYY-MM-DD`. Values without an offset are read as UTC.
    pub fn parse(value: &str) -> Self {
        let value = value.trim();

        if let Ok(date_time) = DateTime::parse_from_rfc3339(value) {
            return Self::Valid(date_time.with_timezone(&Utc));
        }

        let naive = NAIVE_DATE_TIME_FORMATS
            .iter()
            .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
            .or_else(|| {
                NaiveDate::parse_from_str(value, CALENDAR_DATE_FORMAT)
                    .ok()
                    .and_then(|date| date.and_hms_opt(0, 0, 0))
            });

        match naive {
            Some(naive) => Self::Valid(Utc.from_utc_datetime(&naive)),
            None => {
                tracing::debug!(value, "unparseable timestamp");
                Self::Invalid
            }
        }
    }

    /// Joins a calendar date and a clock time read in `tz`.
    ///
    /// Both parts are required. A missing time is never treated as
    /// midnight, it yields [`Timestamp::Invalid`] like any other bad input.
    pub fn from_local_parts<Tz: TimeZone>(
        date: Option<NaiveDate>,
        time: Option<&str>,
        tz: &Tz,
    ) -> Self {
        let (Some(date), Some(time)) = (date, time) else {
            return Self::Invalid;
        };

        let joined = format!("{} {}", date.format(CALENDAR_DATE_FORMAT), time.trim());
        let naive = JOINED_DATE_TIME_FORMATS
            .iter()
            .find_map(|format| NaiveDateTime::parse_from_str(&joined, format).ok());

        match naive.and_then(|naive| tz.from_local_datetime(&naive).earliest()) {
            Some(date_time) => Self::Valid(date_time.with_timezone(&Utc)),
            None => {
                tracing::debug!(%joined, "unparseable local date and time");
                Self::Invalid
            }
        }
    }

    /// Splits the instant into the calendar date and clock time seen in `tz`.
    pub fn to_local_parts<Tz: TimeZone>(&self, tz: &Tz) -> Option<(NaiveDate, String)> {
        let date_time = self.as_date_time()?.with_timezone(tz).naive_local();

        Some((
            date_time.date(),
            date_time.format(CLOCK_TIME_FORMAT).to_string(),
        ))
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid(_))
    }

    pub fn as_date_time(&self) -> Option<DateTime<Utc>> {
        match self {
            Self::Valid(date_time) => Some(*date_time),
            Self::Invalid => None,
        }
    }
}

impl From<DateTime<Utc>> for Timestamp {
    fn from(date_time: DateTime<Utc>) -> Self {
        Self::Valid(date_time)
    }
}

impl Serialize for Timestamp {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::Valid(date_time) => {
                serializer.serialize_str(&date_time.to_rfc3339_opts(SecondsFormat::Millis, true))
            }
            Self::Invalid => serializer.serialize_none(),
        }
    }
}

/// Parses an optional API timestamp. Absence is preserved.
pub fn parse_timestamp(value: Option<&str>) -> Option<Timestamp> {
    value.map(Timestamp::parse)
}

/// Reads the calendar date out of a form value, which the editors send
/// either as `YYYY-MM-DD` or as a full timestamp.
pub fn parse_calendar_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();

    NaiveDate::parse_from_str(value, CALENDAR_DATE_FORMAT)
        .ok()
        .or_else(|| {
            DateTime::parse_from_rfc3339(value)
                .ok()
                .map(|date_time| date_time.date_naive())
        })
        .or_else(|| {
            NAIVE_DATE_TIME_FORMATS
                .iter()
                .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
                .map(|date_time| date_time.date())
        })
}

/// Renders a duration in seconds as `HH:MM:SS`.
pub fn format_duration(seconds: u32) -> String {
    format!(
        "{:02}:{:02}:{:02}",
        seconds / 3600,
        (seconds % 3600) / 60,
        seconds % 60
    )
}

/// Parses `HH:MM:SS` or `MM:SS` back into seconds.
pub fn parse_duration(value: &str) -> Option<u32> {
    let parts = value
        .trim()
        .split(':')
        .map(|part| part.parse::<u32>().ok())
        .collect::<Option<Vec<_>>>()?;

    match parts[..] {
        [hours, minutes, seconds] if minutes < 60 && seconds < 60 => hours
            .checked_mul(3600)?
            .checked_add(minutes * 60 + seconds),
        [minutes, seconds] if seconds < 60 => minutes.checked_mul(60)?.checked_add(seconds),
        _ => None,
    }
}

/// Serde adapter for optional form dates written as `YYYY-MM-DD`.
pub mod calendar_date {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer};

    use super::{parse_calendar_date, CALENDAR_DATE_FORMAT};

    pub fn serialize<S>(date: &Option<NaiveDate>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match date {
            Some(date) => serializer.serialize_str(&date.format(CALENDAR_DATE_FORMAT).to_string()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value: Option<String> = Option::deserialize(deserializer)?;

        Ok(value.as_deref().and_then(parse_calendar_date))
    }
}

#[cfg(test)]
mod tests {
    use chrono::FixedOffset;

    use super::*;

    fn utc(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> Timestamp {
        Timestamp::Valid(Utc.with_ymd_and_hms(y, mo, d, h, mi, 0).unwrap())
    }

    #[test]
    fn parses_rfc3339_and_naive_values() {
        assert_eq!(Timestamp::parse("2024-03-10T09:30:00Z"), utc(2024, 3, 10, 9, 30));
        assert_eq!(
            Timestamp::parse("2024-03-10T17:30:00+08:00"),
            utc(2024, 3, 10, 9, 30)
        );
        assert_eq!(Timestamp::parse("2024-03-10T09:30:00.000"), utc(2024, 3, 10, 9, 30));
        assert_eq!(Timestamp::parse("2024-03-10 09:30"), utc(2024, 3, 10, 9, 30));
        assert_eq!(Timestamp::parse("2024-03-10"), utc(2024, 3, 10, 0, 0));
    }

    #[test]
    fn garbage_is_invalid_not_an_error() {
        assert_eq!(Timestamp::parse("not a date"), Timestamp::Invalid);
        assert_eq!(Timestamp::parse(""), Timestamp::Invalid);
        assert!(parse_timestamp(None).is_none());
    }

    #[test]
    fn serializes_like_the_browser() {
        let json = serde_json::to_value(utc(2024, 3, 10, 9, 30)).unwrap();
        assert_eq!(json, serde_json::json!("2024-03-10T09:30:00.000Z"));

        let json = serde_json::to_value(Timestamp::Invalid).unwrap();
        assert!(json.is_null());
    }

    #[test]
    fn joins_local_date_and_clock_time() {
        let tz = FixedOffset::east_opt(8 * 3600).unwrap();
        let date = NaiveDate::from_ymd_opt(2024, 3, 10);

        assert_eq!(
            Timestamp::from_local_parts(date, Some("05:30 PM"), &tz),
            utc(2024, 3, 10, 9, 30)
        );
        assert_eq!(
            Timestamp::from_local_parts(date, Some("17:30"), &tz),
            utc(2024, 3, 10, 9, 30)
        );
    }

    #[test]
    fn missing_time_does_not_default_to_midnight() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 10);

        assert_eq!(Timestamp::from_local_parts(date, None, &Utc), Timestamp::Invalid);
        assert_eq!(
            Timestamp::from_local_parts(None, Some("09:30 AM"), &Utc),
            Timestamp::Invalid
        );
        assert_eq!(
            Timestamp::from_local_parts(date, Some("half past nine"), &Utc),
            Timestamp::Invalid
        );
    }

    #[test]
    fn splits_into_local_parts() {
        let tz = FixedOffset::west_opt(5 * 3600).unwrap();
        let (date, time) = utc(2024, 3, 10, 2, 15).to_local_parts(&tz).unwrap();

        assert_eq!(date, NaiveDate::from_ymd_opt(2024, 3, 9).unwrap());
        assert_eq!(time, "09:15 PM");
        assert!(Timestamp::Invalid.to_local_parts(&tz).is_none());
    }

    #[test]
    fn reads_form_dates_in_either_shape() {
        let expected = NaiveDate::from_ymd_opt(2024, 3, 10);

        assert_eq!(parse_calendar_date("2024-03-10"), expected);
        assert_eq!(parse_calendar_date("2024-03-10T23:00:00+02:00"), expected);
        assert_eq!(parse_calendar_date("10/03/2024"), None);
    }

    #[test]
    fn duration_text() {
        assert_eq!(format_duration(3725), "01:02:05");
        assert_eq!(parse_duration("01:02:05"), Some(3725));
        assert_eq!(parse_duration("12:30"), Some(750));
        assert_eq!(parse_duration("01:75:00"), None);
        assert_eq!(parse_duration("soon"), None);
        assert_eq!(parse_duration("9999999:00:00"), None);
        assert_eq!(parse_duration("99999999:00"), None);
        assert_eq!(parse_duration("1193046:28:15"), Some(u32::MAX));
    }
}
