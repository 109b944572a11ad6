//! Closed value sets used by literals and special function forms.

use core::fmt;

use crate::lexer::Keyword;

/// Target types of `CAST(expr AS type)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DataType {
    Date,
    Time,
    Timestamp,
    Int,
    Integer,
    Double,
    Long,
    Float,
    String,
    Boolean,
}

impl DataType {
    /// Maps a keyword to a cast target type.
    #[must_use]
    pub const fn from_keyword(kw: Keyword) -> Option<Self> {
        Some(match kw {
            Keyword::Date => Self::Date,
            Keyword::Time => Self::Time,
            Keyword::Timestamp => Self::Timestamp,
            Keyword::Int => Self::Int,
            Keyword::Integer => Self::Integer,
            Keyword::Double => Self::Double,
            Keyword::Long => Self::Long,
            Keyword::Float => Self::Float,
            Keyword::String => Self::String,
            Keyword::Boolean => Self::Boolean,
            _ => return None,
        })
    }

    /// Returns the SQL representation of the data type.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Date => "DATE",
            Self::Time => "TIME",
            Self::Timestamp => "TIMESTAMP",
            Self::Int => "INT",
            Self::Integer => "INTEGER",
            Self::Double => "DOUBLE",
            Self::Long => "LONG",
            Self::Float => "FLOAT",
            Self::String => "STRING",
            Self::Boolean => "BOOLEAN",
        }
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Interval and datetime-part units.
///
/// The first nine are simple units, the rest are compound `A_B` units.
/// `TIMESTAMPADD`/`TIMESTAMPDIFF` accept only simple units; `INTERVAL` and
/// `EXTRACT` accept both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TimeUnit {
    Microsecond,
    Second,
    Minute,
    Hour,
    Day,
    Week,
    Month,
    Quarter,
    Year,
    SecondMicrosecond,
    MinuteMicrosecond,
    MinuteSecond,
    HourMicrosecond,
    HourSecond,
    HourMinute,
    DayMicrosecond,
    DaySecond,
    DayMinute,
    DayHour,
    YearMonth,
}

impl TimeUnit {
    /// Maps a keyword to a unit.
    #[must_use]
    pub const fn from_keyword(kw: Keyword) -> Option<Self> {
        Some(match kw {
            Keyword::Microsecond => Self::Microsecond,
            Keyword::Second => Self::Second,
            Keyword::Minute => Self::Minute,
            Keyword::Hour => Self::Hour,
            Keyword::Day => Self::Day,
            Keyword::Week => Self::Week,
            Keyword::Month => Self::Month,
            Keyword::Quarter => Self::Quarter,
            Keyword::Year => Self::Year,
            Keyword::SecondMicrosecond => Self::SecondMicrosecond,
            Keyword::MinuteMicrosecond => Self::MinuteMicrosecond,
            Keyword::MinuteSecond => Self::MinuteSecond,
            Keyword::HourMicrosecond => Self::HourMicrosecond,
            Keyword::HourSecond => Self::HourSecond,
            Keyword::HourMinute => Self::HourMinute,
            Keyword::DayMicrosecond => Self::DayMicrosecond,
            Keyword::DaySecond => Self::DaySecond,
            Keyword::DayMinute => Self::DayMinute,
            Keyword::DayHour => Self::DayHour,
            Keyword::YearMonth => Self::YearMonth,
            _ => return None,
        })
    }

    /// Returns true for single-component units.
    #[must_use]
    pub const fn is_simple(&self) -> bool {
        matches!(
            self,
            Self::Microsecond
                | Self::Second
                | Self::Minute
                | Self::Hour
                | Self::Day
                | Self::Week
                | Self::Month
                | Self::Quarter
                | Self::Year
        )
    }

    /// Returns the SQL representation of the unit.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Microsecond => "MICROSECOND",
            Self::Second => "SECOND",
            Self::Minute => "MINUTE",
            Self::Hour => "HOUR",
            Self::Day => "DAY",
            Self::Week => "WEEK",
            Self::Month => "MONTH",
            Self::Quarter => "QUARTER",
            Self::Year => "YEAR",
            Self::SecondMicrosecond => "SECOND_MICROSECOND",
            Self::MinuteMicrosecond => "MINUTE_MICROSECOND",
            Self::MinuteSecond => "MINUTE_SECOND",
            Self::HourMicrosecond => "HOUR_MICROSECOND",
            Self::HourSecond => "HOUR_SECOND",
            Self::HourMinute => "HOUR_MINUTE",
            Self::DayMicrosecond => "DAY_MICROSECOND",
            Self::DaySecond => "DAY_SECOND",
            Self::DayMinute => "DAY_MINUTE",
            Self::DayHour => "DAY_HOUR",
            Self::YearMonth => "YEAR_MONTH",
        }
    }
}

impl fmt::Display for TimeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// First argument of `GET_FORMAT`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GetFormatType {
    Date,
    Datetime,
    Time,
    Timestamp,
}

impl GetFormatType {
    /// Maps a keyword to a format type.
    #[must_use]
    pub const fn from_keyword(kw: Keyword) -> Option<Self> {
        match kw {
            Keyword::Date => Some(Self::Date),
            Keyword::Datetime => Some(Self::Datetime),
            Keyword::Time => Some(Self::Time),
            Keyword::Timestamp => Some(Self::Timestamp),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Date => "DATE",
            Self::Datetime => "DATETIME",
            Self::Time => "TIME",
            Self::Timestamp => "TIMESTAMP",
        }
    }
}

impl fmt::Display for GetFormatType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_unit_keywords() {
        assert_eq!(TimeUnit::from_keyword(Keyword::Day), Some(TimeUnit::Day));
        assert_eq!(
            TimeUnit::from_keyword(Keyword::YearMonth),
            Some(TimeUnit::YearMonth)
        );
        assert_eq!(TimeUnit::from_keyword(Keyword::Select), None);
    }

    #[test]
    fn test_simple_units() {
        assert!(TimeUnit::Quarter.is_simple());
        assert!(!TimeUnit::DayHour.is_simple());
    }

    #[test]
    fn test_cast_types() {
        assert_eq!(DataType::from_keyword(Keyword::Long), Some(DataType::Long));
        assert_eq!(DataType::from_keyword(Keyword::Datetime), None);
        assert_eq!(DataType::Boolean.to_string(), "BOOLEAN");
    }

    #[test]
    fn test_get_format_types() {
        assert_eq!(
            GetFormatType::from_keyword(Keyword::Datetime),
            Some(GetFormatType::Datetime)
        );
        assert_eq!(GetFormatType::from_keyword(Keyword::Int), None);
    }
}
