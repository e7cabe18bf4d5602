use time::{
    format_description::FormatItem, macros::format_description, util::is_leap_year, Date, Month,
};

/// Entry and display format, day/month/year with slashes
static DMY_FMT: &[FormatItem<'_>] = format_description!("[day]/[month]/[year]");

pub(crate) fn format_dmy(date: Date) -> String {
    date.format(&DMY_FMT)
        .expect("formatting with a complete format description cannot fail")
}

pub(crate) fn parse_dmy(s: &str) -> Result<Date, time::error::Parse> {
    Date::parse(s, &DMY_FMT)
}

pub(crate) fn days_in_month(year: i32, month: Month) -> u8 {
    match month {
        Month::January
        | Month::March
        | Month::May
        | Month::July
        | Month::August
        | Month::October
        | Month::December => 31,
        Month::April | Month::June | Month::September | Month::November => 30,
        Month::February => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
    }
}

pub(crate) fn first_of_month(date: Date) -> Date {
    date.replace_day(1).expect("day 1 exists in every month")
}

// Returns `None` at the edges of the representable timeline
pub(crate) fn month_forwards(month: Date) -> Option<Date> {
    let (year, next) = if month.month() == Month::December {
        (month.year().checked_add(1)?, Month::January)
    } else {
        (month.year(), month.month().next())
    };
    Date::from_calendar_date(year, next, 1).ok()
}

pub(crate) fn month_backwards(month: Date) -> Option<Date> {
    let (year, previous) = if month.month() == Month::January {
        (month.year().checked_sub(1)?, Month::December)
    } else {
        (month.year(), month.month().previous())
    };
    Date::from_calendar_date(year, previous, 1).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    #[test]
    fn test_format_dmy() {
        assert_eq!(format_dmy(date!(2024 - 06 - 01)), "01/06/2024");
        assert_eq!(format_dmy(date!(0001 - 01 - 01)), "01/01/0001");
    }

    #[test]
    fn test_parse_dmy() {
        assert_eq!(parse_dmy("25/12/2023").unwrap(), date!(2023 - 12 - 25));
        assert!(parse_dmy("2023-12-25").is_err());
    }

    #[test]
    fn test_days_in_month() {
        assert_eq!(days_in_month(2024, Month::January), 31);
        assert_eq!(days_in_month(2024, Month::April), 30);
        assert_eq!(days_in_month(2024, Month::February), 29);
        assert_eq!(days_in_month(2023, Month::February), 28);
        assert_eq!(days_in_month(1900, Month::February), 28);
        assert_eq!(days_in_month(2000, Month::February), 29);
    }

    #[test]
    fn test_month_stepping() {
        assert_eq!(
            month_forwards(date!(2023 - 12 - 01)),
            Some(date!(2024 - 01 - 01))
        );
        assert_eq!(
            month_backwards(date!(2024 - 01 - 01)),
            Some(date!(2023 - 12 - 01))
        );
        assert_eq!(
            month_forwards(date!(2024 - 05 - 01)),
            Some(date!(2024 - 06 - 01))
        );
        assert_eq!(month_forwards(date!(9999 - 12 - 01)), None);
    }
}
