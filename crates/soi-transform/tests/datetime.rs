//! Property tests for date reformatting.

use chrono::NaiveDate;
use proptest::prelude::*;

use soi_model::{HOST_DATE_FORMAT, SOURCE_DATE_FORMAT};
use soi_transform::reformat_date;

proptest! {
    /// Reformatting preserves the calendar date for every valid MM-DD-YYYY.
    #[test]
    fn reformat_preserves_calendar_date(days in 0u32..40_000) {
        let date = NaiveDate::from_ymd_opt(1970, 1, 1).unwrap()
            + chrono::Days::new(u64::from(days));
        let source = date.format(SOURCE_DATE_FORMAT).to_string();

        let host = reformat_date(&source, SOURCE_DATE_FORMAT, HOST_DATE_FORMAT).unwrap();

        let round = NaiveDate::parse_from_str(&host, HOST_DATE_FORMAT).unwrap();
        prop_assert_eq!(round, date);
        prop_assert_eq!(host, date.format(HOST_DATE_FORMAT).to_string());
    }

    /// Garbage never parses into a date silently.
    #[test]
    fn non_date_text_is_rejected(s in "[a-z ]{0,12}") {
        prop_assert!(reformat_date(&s, SOURCE_DATE_FORMAT, HOST_DATE_FORMAT).is_err());
    }
}
