//! Date formats used by the API and on the pages.

use time::{Date, format_description::BorrowedFormatItem, macros::format_description};

/// Calendar dates as the API and HTML date inputs expect them, e.g. "2024-05-01".
pub const ISO_DATE_FORMAT: &[BorrowedFormatItem] = format_description!("[year]-[month]-[day]");

/// Turkish short dates, e.g. "01.05.2024".
const SHORT_DATE_FORMAT: &[BorrowedFormatItem] = format_description!("[day].[month].[year]");

/// Parse an ISO calendar date, e.g. the value of a date input.
pub fn parse_iso_date(text: &str) -> Option<Date> {
    Date::parse(text.trim(), ISO_DATE_FORMAT).ok()
}

/// Show an ISO date, or the date part of an ISO date-time, as a Turkish short date.
///
/// Values that do not start with an ISO date are returned unchanged.
pub fn format_short_date(text: &str) -> String {
    text.get(..10)
        .and_then(parse_iso_date)
        .and_then(|date| date.format(SHORT_DATE_FORMAT).ok())
        .unwrap_or_else(|| text.to_owned())
}

pub mod iso_date {
    //! Serializes a [time::Date] as "YYYY-MM-DD".
    //!
    //! The default serializer for [time::Date] does not zero-pad every field,
    //! which the API would reject.
    use serde::Serializer;
    use time::Date;

    use super::ISO_DATE_FORMAT;

    pub fn serialize<S>(date: &Date, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let formatted = date
            .format(ISO_DATE_FORMAT)
            .map_err(serde::ser::Error::custom)?;
        serializer.serialize_str(&formatted)
    }
}

#[cfg(test)]
mod tests {
    use serde::Serialize;
    use time::{Date, macros::date};

    use super::{format_short_date, iso_date, parse_iso_date};

    #[test]
    fn created_at_is_shown_as_short_date() {
        assert_eq!(format_short_date("2024-05-01T09:30:12.123456"), "01.05.2024");
    }

    #[test]
    fn transaction_date_is_shown_as_short_date() {
        assert_eq!(format_short_date("2024-12-31"), "31.12.2024");
    }

    #[test]
    fn unparseable_created_at_is_shown_verbatim() {
        assert_eq!(format_short_date("dün"), "dün");
        assert_eq!(format_short_date(""), "");
    }

    #[test]
    fn parses_date_input_value() {
        assert_eq!(parse_iso_date("2024-01-09"), Some(date!(2024 - 01 - 09)));
        assert_eq!(parse_iso_date(""), None);
        assert_eq!(parse_iso_date("09.01.2024"), None);
    }

    #[derive(Serialize)]
    struct Dated {
        #[serde(with = "iso_date")]
        date: Date,
    }

    #[test]
    fn serializes_zero_padded_date() {
        let dated = Dated {
            date: date!(2024 - 01 - 09),
        };

        let json = serde_json::to_string(&dated).unwrap();

        assert_eq!(json, r#"{"date":"2024-01-09"}"#);
    }
}
