//! Keyword categories.
//!
//! Each category is a closed set written out as a match so that the accepted
//! vocabulary can be audited against the grammar word by word.

use crate::lexer::{Keyword, TokenKind};

impl Keyword {
    /// Aggregate function names.
    #[must_use]
    pub const fn is_aggregate_function(self) -> bool {
        matches!(
            self,
            Self::Avg
                | Self::Count
                | Self::Sum
                | Self::Min
                | Self::Max
                | Self::VarPop
                | Self::VarSamp
                | Self::Variance
                | Self::Std
                | Self::Stddev
                | Self::StddevPop
                | Self::StddevSamp
        )
    }

    /// Trigonometric function names.
    #[must_use]
    pub const fn is_trigonometric_function(self) -> bool {
        matches!(
            self,
            Self::Acos
                | Self::Asin
                | Self::Atan
                | Self::Atan2
                | Self::Cos
                | Self::Cosh
                | Self::Cot
                | Self::Degrees
                | Self::Radians
                | Self::Sin
                | Self::Sinh
                | Self::Tan
        )
    }

    /// Arithmetic function names.
    #[must_use]
    pub const fn is_arithmetic_function(self) -> bool {
        matches!(
            self,
            Self::Add | Self::Subtract | Self::Multiply | Self::Divide | Self::Mod | Self::Modulus
        )
    }

    /// Mathematical function names, including trigonometric and arithmetic ones.
    #[must_use]
    pub const fn is_math_function(self) -> bool {
        self.is_trigonometric_function()
            || self.is_arithmetic_function()
            || matches!(
                self,
                Self::Abs
                    | Self::Cbrt
                    | Self::Ceil
                    | Self::Ceiling
                    | Self::Conv
                    | Self::Crc32
                    | Self::E
                    | Self::Exp
                    | Self::Expm1
                    | Self::Floor
                    | Self::Ln
                    | Self::Log
                    | Self::Log10
                    | Self::Log2
                    | Self::Pi
                    | Self::Pow
                    | Self::Power
                    | Self::Rand
                    | Self::Rint
                    | Self::Round
                    | Self::Sign
                    | Self::Signum
                    | Self::Sqrt
                    | Self::Truncate
            )
    }

    /// Datetime constants usable as zero-argument functions.
    #[must_use]
    pub const fn is_datetime_constant(self) -> bool {
        matches!(
            self,
            Self::CurrentDate
                | Self::CurrentTime
                | Self::CurrentTimestamp
                | Self::Localtime
                | Self::Localtimestamp
                | Self::UtcTimestamp
                | Self::UtcDate
                | Self::UtcTime
        )
    }

    /// Date and time function names.
    #[must_use]
    pub const fn is_datetime_function(self) -> bool {
        self.is_datetime_constant()
            || matches!(
                self,
                Self::Adddate
                    | Self::Addtime
                    | Self::ConvertTz
                    | Self::Curdate
                    | Self::Curtime
                    | Self::Date
                    | Self::DateAdd
                    | Self::DateFormat
                    | Self::DateSub
                    | Self::Datediff
                    | Self::Datetime
                    | Self::Day
                    | Self::Dayname
                    | Self::Dayofmonth
                    | Self::DayOfMonth
                    | Self::Dayofweek
                    | Self::Dayofyear
                    | Self::DayOfYear
                    | Self::DayOfWeek
                    | Self::FromDays
                    | Self::FromUnixtime
                    | Self::Hour
                    | Self::HourOfDay
                    | Self::LastDay
                    | Self::Makedate
                    | Self::Maketime
                    | Self::Microsecond
                    | Self::Minute
                    | Self::MinuteOfDay
                    | Self::MinuteOfHour
                    | Self::Month
                    | Self::Monthname
                    | Self::MonthOfYear
                    | Self::Now
                    | Self::PeriodAdd
                    | Self::PeriodDiff
                    | Self::Quarter
                    | Self::SecToTime
                    | Self::Second
                    | Self::SecondOfMinute
                    | Self::Subdate
                    | Self::Subtime
                    | Self::Sysdate
                    | Self::StrToDate
                    | Self::Time
                    | Self::TimeFormat
                    | Self::TimeToSec
                    | Self::Timediff
                    | Self::Timestamp
                    | Self::ToDays
                    | Self::ToSeconds
                    | Self::UnixTimestamp
                    | Self::Week
                    | Self::Weekday
                    | Self::WeekOfYear
                    | Self::Weekofyear
                    | Self::Year
                    | Self::Yearweek
            )
    }

    /// String function names.
    #[must_use]
    pub const fn is_text_function(self) -> bool {
        matches!(
            self,
            Self::Substr
                | Self::Substring
                | Self::Trim
                | Self::Ltrim
                | Self::Rtrim
                | Self::Lower
                | Self::Upper
                | Self::Concat
                | Self::ConcatWs
                | Self::Length
                | Self::Strcmp
                | Self::Right
                | Self::Left
                | Self::Ascii
                | Self::Locate
                | Self::Replace
                | Self::Reverse
        )
    }

    /// Conditional function names.
    #[must_use]
    pub const fn is_flow_control_function(self) -> bool {
        matches!(self, Self::If | Self::Ifnull | Self::Nullif | Self::Isnull)
    }

    /// System function names.
    #[must_use]
    pub const fn is_system_function(self) -> bool {
        matches!(self, Self::Typeof)
    }

    /// Nested-document function names.
    #[must_use]
    pub const fn is_nested_function(self) -> bool {
        matches!(self, Self::Nested)
    }

    /// Names that parse as a plain `name(args)` scalar call.
    #[must_use]
    pub const fn is_scalar_function(self) -> bool {
        self.is_math_function()
            || self.is_datetime_function()
            || self.is_text_function()
            || self.is_flow_control_function()
            || self.is_system_function()
            || self.is_nested_function()
    }

    /// Ranking functions that require an `OVER` clause.
    #[must_use]
    pub const fn is_ranking_function(self) -> bool {
        matches!(self, Self::RowNumber | Self::Rank | Self::DenseRank)
    }

    /// The relevance function that takes no field.
    #[must_use]
    pub const fn is_no_field_relevance_function(self) -> bool {
        matches!(self, Self::Query)
    }

    /// Relevance functions over one field.
    #[must_use]
    pub const fn is_single_field_relevance_function(self) -> bool {
        matches!(
            self,
            Self::Match
                | Self::Matchquery
                | Self::MatchQuery
                | Self::MatchPhrase
                | Self::Matchphrase
                | Self::Matchphrasequery
                | Self::MatchBoolPrefix
                | Self::MatchPhrasePrefix
                | Self::WildcardQuery
                | Self::Wildcardquery
        )
    }

    /// Relevance functions over a list of fields.
    #[must_use]
    pub const fn is_multi_field_relevance_function(self) -> bool {
        matches!(
            self,
            Self::MultiMatch
                | Self::Multimatch
                | Self::Multimatchquery
                | Self::SimpleQueryString
                | Self::QueryString
        )
    }

    /// Single-field functions allowed in `field = fn('text')` form.
    #[must_use]
    pub const fn is_alt_single_field_relevance_function(self) -> bool {
        matches!(
            self,
            Self::MatchQuery | Self::Matchquery | Self::MatchPhrase | Self::Matchphrase
        )
    }

    /// Multi-field functions allowed in `field = fn('text')` form.
    #[must_use]
    pub const fn is_alt_multi_field_relevance_function(self) -> bool {
        matches!(self, Self::MultiMatch | Self::Multimatch)
    }

    /// Any relevance function in call position.
    #[must_use]
    pub const fn is_relevance_function(self) -> bool {
        self.is_no_field_relevance_function()
            || self.is_single_field_relevance_function()
            || self.is_multi_field_relevance_function()
    }

    /// Score wrappers.
    #[must_use]
    pub const fn is_score_function(self) -> bool {
        matches!(self, Self::Score | Self::Scorequery | Self::ScoreQuery)
    }

    /// Option names accepted as `name = value` in relevance functions.
    #[must_use]
    pub const fn is_relevance_arg_name(self) -> bool {
        matches!(
            self,
            Self::AllowLeadingWildcard
                | Self::Analyzer
                | Self::AnalyzeWildcard
                | Self::AutoGenerateSynonymsPhraseQuery
                | Self::Boost
                | Self::CaseInsensitive
                | Self::CutoffFrequency
                | Self::DefaultField
                | Self::DefaultOperator
                | Self::Escape
                | Self::EnablePositionIncrements
                | Self::Fields
                | Self::Flags
                | Self::Fuzziness
                | Self::FuzzyMaxExpansions
                | Self::FuzzyPrefixLength
                | Self::FuzzyRewrite
                | Self::FuzzyTranspositions
                | Self::Lenient
                | Self::LowFreqOperator
                | Self::MaxDeterminizedStates
                | Self::MaxExpansions
                | Self::MinimumShouldMatch
                | Self::Operator
                | Self::PhraseSlop
                | Self::PrefixLength
                | Self::QuoteAnalyzer
                | Self::QuoteFieldSuffix
                | Self::Rewrite
                | Self::Slop
                | Self::TieBreaker
                | Self::TimeZone
                | Self::Type
                | Self::ZeroTermsQuery
        )
    }

    /// Reserved words that may still be used as identifiers.
    #[must_use]
    pub const fn can_be_identifier(self) -> bool {
        self.is_scalar_function()
            || matches!(
                self,
                Self::Full
                    | Self::Field
                    | Self::D
                    | Self::T
                    | Self::Ts
                    | Self::Count
                    | Self::Sum
                    | Self::Avg
                    | Self::Max
                    | Self::Min
                    | Self::First
                    | Self::Last
                    | Self::Type
            )
    }
}

impl TokenKind {
    /// Returns true if this token can be an identifier segment.
    ///
    /// Double-quoted text is excluded; it is a name only where no string
    /// literal could appear.
    #[must_use]
    pub const fn is_identifier(&self) -> bool {
        match self {
            Self::Identifier(_) | Self::BacktickQuoted(_) => true,
            Self::Keyword(kw) => kw.can_be_identifier(),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn count(pred: fn(Keyword) -> bool) -> usize {
        Keyword::ALL.iter().filter(|kw| pred(**kw)).count()
    }

    #[test]
    fn test_category_sizes() {
        assert_eq!(count(Keyword::is_aggregate_function), 12);
        assert_eq!(count(Keyword::is_trigonometric_function), 12);
        assert_eq!(count(Keyword::is_arithmetic_function), 6);
        assert_eq!(count(Keyword::is_text_function), 17);
        assert_eq!(count(Keyword::is_flow_control_function), 4);
        assert_eq!(count(Keyword::is_datetime_constant), 8);
        assert_eq!(count(Keyword::is_relevance_arg_name), 34);
        assert_eq!(count(Keyword::is_single_field_relevance_function), 10);
        assert_eq!(count(Keyword::is_multi_field_relevance_function), 5);
        assert_eq!(count(Keyword::is_score_function), 3);
    }

    #[test]
    fn test_mod_is_both_operator_and_function() {
        assert!(Keyword::Mod.is_math_function());
        assert!(Keyword::Mod.is_scalar_function());
        assert!(!Keyword::Div.is_scalar_function());
    }

    #[test]
    fn test_keywords_as_identifiers() {
        for kw in [
            Keyword::Count,
            Keyword::Date,
            Keyword::Left,
            Keyword::D,
            Keyword::Type,
            Keyword::Nested,
            Keyword::Typeof,
        ] {
            assert!(kw.can_be_identifier(), "{kw:?}");
        }
        for kw in [
            Keyword::Select,
            Keyword::Match,
            Keyword::Query,
            Keyword::Score,
            Keyword::Interval,
            Keyword::Position,
            Keyword::Extract,
            Keyword::Stddev,
            Keyword::RowNumber,
        ] {
            assert!(!kw.can_be_identifier(), "{kw:?}");
        }
    }

    #[test]
    fn test_alt_names_are_canonical_names_too() {
        for kw in Keyword::ALL {
            if kw.is_alt_single_field_relevance_function() {
                assert!(kw.is_single_field_relevance_function());
            }
            if kw.is_alt_multi_field_relevance_function() {
                assert!(kw.is_multi_field_relevance_function());
            }
        }
    }

    #[test]
    fn test_token_is_identifier() {
        assert!(TokenKind::Identifier("a".into()).is_identifier());
        assert!(TokenKind::BacktickQuoted("a b".into()).is_identifier());
        assert!(TokenKind::Keyword(Keyword::Ts).is_identifier());
        assert!(!TokenKind::DoubleQuoted("a".into()).is_identifier());
        assert!(!TokenKind::Keyword(Keyword::From).is_identifier());
    }
}
