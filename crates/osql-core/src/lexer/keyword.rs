//! Reserved words of the OpenSearch SQL dialect.
//!
//! Every word the lexer reserves has its own variant so that the parser can
//! dispatch on exact keyword identity. Lookup is ASCII case-insensitive.

macro_rules! define_keywords {
    ($($variant:ident => $text:literal,)*) => {
        /// A reserved word.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        pub enum Keyword {
            $(
                #[doc = concat!("`", $text, "`")]
                $variant,
            )*
        }

        impl Keyword {
            /// Every keyword, in declaration order.
            pub const ALL: &'static [Self] = &[$(Self::$variant,)*];

            /// Looks up a keyword by its spelling, ignoring ASCII case.
            #[must_use]
            #[allow(clippy::should_implement_trait)]
            pub fn from_str(s: &str) -> Option<Self> {
                if s.len() > MAX_KEYWORD_LEN {
                    return None;
                }
                match s.to_ascii_uppercase().as_str() {
                    $($text => Some(Self::$variant),)*
                    _ => None,
                }
            }

            /// Returns the canonical upper-case spelling.
            #[must_use]
            pub const fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $text,)*
                }
            }
        }
    };
}

/// Length of the longest keyword (`AUTO_GENERATE_SYNONYMS_PHRASE_QUERY`).
const MAX_KEYWORD_LEN: usize = 35;

define_keywords! {
    // Statement and clause keywords
    All => "ALL",
    And => "AND",
    As => "AS",
    Asc => "ASC",
    Boolean => "BOOLEAN",
    Between => "BETWEEN",
    By => "BY",
    Case => "CASE",
    Cast => "CAST",
    Cross => "CROSS",
    Columns => "COLUMNS",
    Datetime => "DATETIME",
    Delete => "DELETE",
    Desc => "DESC",
    Describe => "DESCRIBE",
    Distinct => "DISTINCT",
    Double => "DOUBLE",
    Else => "ELSE",
    Exists => "EXISTS",
    False => "FALSE",
    Float => "FLOAT",
    First => "FIRST",
    From => "FROM",
    Group => "GROUP",
    Having => "HAVING",
    In => "IN",
    Inner => "INNER",
    Int => "INT",
    Integer => "INTEGER",
    Is => "IS",
    Join => "JOIN",
    Last => "LAST",
    Left => "LEFT",
    Like => "LIKE",
    Limit => "LIMIT",
    Long => "LONG",
    Match => "MATCH",
    Natural => "NATURAL",
    Not => "NOT",
    Null => "NULL",
    Nulls => "NULLS",
    On => "ON",
    Or => "OR",
    Order => "ORDER",
    Outer => "OUTER",
    Over => "OVER",
    Partition => "PARTITION",
    Regexp => "REGEXP",
    Right => "RIGHT",
    Select => "SELECT",
    Show => "SHOW",
    String => "STRING",
    Then => "THEN",
    True => "TRUE",
    Union => "UNION",
    Using => "USING",
    When => "WHEN",
    Where => "WHERE",

    // Aggregates and miscellaneous
    Avg => "AVG",
    Count => "COUNT",
    Max => "MAX",
    Min => "MIN",
    Sum => "SUM",
    VarPop => "VAR_POP",
    VarSamp => "VAR_SAMP",
    Variance => "VARIANCE",
    Std => "STD",
    Stddev => "STDDEV",
    StddevPop => "STDDEV_POP",
    StddevSamp => "STDDEV_SAMP",
    Substring => "SUBSTRING",
    Trim => "TRIM",
    End => "END",
    Full => "FULL",
    Offset => "OFFSET",

    // Intervals
    Interval => "INTERVAL",
    Microsecond => "MICROSECOND",
    Second => "SECOND",
    Minute => "MINUTE",
    Hour => "HOUR",
    Day => "DAY",
    Week => "WEEK",
    Month => "MONTH",
    Quarter => "QUARTER",
    Year => "YEAR",
    SecondMicrosecond => "SECOND_MICROSECOND",
    MinuteMicrosecond => "MINUTE_MICROSECOND",
    MinuteSecond => "MINUTE_SECOND",
    HourMicrosecond => "HOUR_MICROSECOND",
    HourSecond => "HOUR_SECOND",
    HourMinute => "HOUR_MINUTE",
    DayMicrosecond => "DAY_MICROSECOND",
    DaySecond => "DAY_SECOND",
    DayMinute => "DAY_MINUTE",
    DayHour => "DAY_HOUR",
    YearMonth => "YEAR_MONTH",

    // Admin
    Tables => "TABLES",

    // Scalar functions
    Abs => "ABS",
    Acos => "ACOS",
    Add => "ADD",
    Addtime => "ADDTIME",
    Ascii => "ASCII",
    Asin => "ASIN",
    Atan => "ATAN",
    Atan2 => "ATAN2",
    Cbrt => "CBRT",
    Ceil => "CEIL",
    Ceiling => "CEILING",
    Concat => "CONCAT",
    ConcatWs => "CONCAT_WS",
    Conv => "CONV",
    ConvertTz => "CONVERT_TZ",
    Cos => "COS",
    Cosh => "COSH",
    Cot => "COT",
    Crc32 => "CRC32",
    Curdate => "CURDATE",
    Curtime => "CURTIME",
    CurrentDate => "CURRENT_DATE",
    CurrentTime => "CURRENT_TIME",
    CurrentTimestamp => "CURRENT_TIMESTAMP",
    Date => "DATE",
    DateAdd => "DATE_ADD",
    DateFormat => "DATE_FORMAT",
    DateSub => "DATE_SUB",
    Datediff => "DATEDIFF",
    Dayname => "DAYNAME",
    Dayofmonth => "DAYOFMONTH",
    Dayofweek => "DAYOFWEEK",
    Dayofyear => "DAYOFYEAR",
    Degrees => "DEGREES",
    Divide => "DIVIDE",
    E => "E",
    Exp => "EXP",
    Expm1 => "EXPM1",
    Extract => "EXTRACT",
    Floor => "FLOOR",
    FromDays => "FROM_DAYS",
    FromUnixtime => "FROM_UNIXTIME",
    GetFormat => "GET_FORMAT",
    If => "IF",
    Ifnull => "IFNULL",
    Isnull => "ISNULL",
    LastDay => "LAST_DAY",
    Length => "LENGTH",
    Ln => "LN",
    Localtime => "LOCALTIME",
    Localtimestamp => "LOCALTIMESTAMP",
    Locate => "LOCATE",
    Log => "LOG",
    Log10 => "LOG10",
    Log2 => "LOG2",
    Lower => "LOWER",
    Ltrim => "LTRIM",
    Makedate => "MAKEDATE",
    Maketime => "MAKETIME",
    Modulus => "MODULUS",
    Monthname => "MONTHNAME",
    Multiply => "MULTIPLY",
    Now => "NOW",
    Nullif => "NULLIF",
    PeriodAdd => "PERIOD_ADD",
    PeriodDiff => "PERIOD_DIFF",
    Pi => "PI",
    Position => "POSITION",
    Pow => "POW",
    Power => "POWER",
    Radians => "RADIANS",
    Rand => "RAND",
    Replace => "REPLACE",
    Rint => "RINT",
    Round => "ROUND",
    Rtrim => "RTRIM",
    Reverse => "REVERSE",
    SecToTime => "SEC_TO_TIME",
    Sign => "SIGN",
    Signum => "SIGNUM",
    Sin => "SIN",
    Sinh => "SINH",
    Sqrt => "SQRT",
    StrToDate => "STR_TO_DATE",
    Subdate => "SUBDATE",
    Subtime => "SUBTIME",
    Subtract => "SUBTRACT",
    Sysdate => "SYSDATE",
    Tan => "TAN",
    Time => "TIME",
    Timediff => "TIMEDIFF",
    TimeFormat => "TIME_FORMAT",
    TimeToSec => "TIME_TO_SEC",
    Timestamp => "TIMESTAMP",
    Truncate => "TRUNCATE",
    ToDays => "TO_DAYS",
    ToSeconds => "TO_SECONDS",
    UnixTimestamp => "UNIX_TIMESTAMP",
    Upper => "UPPER",
    UtcDate => "UTC_DATE",
    UtcTime => "UTC_TIME",
    UtcTimestamp => "UTC_TIMESTAMP",

    // ODBC escapes
    D => "D",
    T => "T",
    Ts => "TS",

    // Window functions
    DenseRank => "DENSE_RANK",
    Rank => "RANK",
    RowNumber => "ROW_NUMBER",

    // Search engine functions and legacy aggregations
    DateHistogram => "DATE_HISTOGRAM",
    DayOfMonth => "DAY_OF_MONTH",
    DayOfYear => "DAY_OF_YEAR",
    DayOfWeek => "DAY_OF_WEEK",
    Exclude => "EXCLUDE",
    ExtendedStats => "EXTENDED_STATS",
    Field => "FIELD",
    Filter => "FILTER",
    GeoBoundingBox => "GEO_BOUNDING_BOX",
    GeoCell => "GEO_CELL",
    GeoDistance => "GEO_DISTANCE",
    GeoDistanceRange => "GEO_DISTANCE_RANGE",
    GeoIntersects => "GEO_INTERSECTS",
    GeoPolygon => "GEO_POLYGON",
    Histogram => "HISTOGRAM",
    HourOfDay => "HOUR_OF_DAY",
    Include => "INCLUDE",
    InTerms => "IN_TERMS",
    Matchphrase => "MATCHPHRASE",
    MatchPhrase => "MATCH_PHRASE",
    Matchphrasequery => "MATCHPHRASEQUERY",
    SimpleQueryString => "SIMPLE_QUERY_STRING",
    QueryString => "QUERY_STRING",
    MatchPhrasePrefix => "MATCH_PHRASE_PREFIX",
    Matchquery => "MATCHQUERY",
    MatchQuery => "MATCH_QUERY",
    MinuteOfDay => "MINUTE_OF_DAY",
    MinuteOfHour => "MINUTE_OF_HOUR",
    MonthOfYear => "MONTH_OF_YEAR",
    Multimatch => "MULTIMATCH",
    MultiMatch => "MULTI_MATCH",
    Multimatchquery => "MULTIMATCHQUERY",
    Nested => "NESTED",
    Percentiles => "PERCENTILES",
    RegexpQuery => "REGEXP_QUERY",
    ReverseNested => "REVERSE_NESTED",
    Query => "QUERY",
    Range => "RANGE",
    Score => "SCORE",
    Scorequery => "SCOREQUERY",
    ScoreQuery => "SCORE_QUERY",
    SecondOfMinute => "SECOND_OF_MINUTE",
    Stats => "STATS",
    Term => "TERM",
    Terms => "TERMS",
    Timestampadd => "TIMESTAMPADD",
    Timestampdiff => "TIMESTAMPDIFF",
    Tophits => "TOPHITS",
    Typeof => "TYPEOF",
    WeekOfYear => "WEEK_OF_YEAR",
    Weekofyear => "WEEKOFYEAR",
    Weekday => "WEEKDAY",
    Wildcardquery => "WILDCARDQUERY",
    WildcardQuery => "WILDCARD_QUERY",
    Substr => "SUBSTR",
    Strcmp => "STRCMP",
    Adddate => "ADDDATE",
    Yearweek => "YEARWEEK",

    // Relevance arguments
    AllowLeadingWildcard => "ALLOW_LEADING_WILDCARD",
    Analyzer => "ANALYZER",
    AnalyzeWildcard => "ANALYZE_WILDCARD",
    AutoGenerateSynonymsPhraseQuery => "AUTO_GENERATE_SYNONYMS_PHRASE_QUERY",
    Boost => "BOOST",
    CaseInsensitive => "CASE_INSENSITIVE",
    CutoffFrequency => "CUTOFF_FREQUENCY",
    DefaultField => "DEFAULT_FIELD",
    DefaultOperator => "DEFAULT_OPERATOR",
    Escape => "ESCAPE",
    EnablePositionIncrements => "ENABLE_POSITION_INCREMENTS",
    Fields => "FIELDS",
    Flags => "FLAGS",
    Fuzziness => "FUZZINESS",
    FuzzyMaxExpansions => "FUZZY_MAX_EXPANSIONS",
    FuzzyPrefixLength => "FUZZY_PREFIX_LENGTH",
    FuzzyRewrite => "FUZZY_REWRITE",
    FuzzyTranspositions => "FUZZY_TRANSPOSITIONS",
    Lenient => "LENIENT",
    LowFreqOperator => "LOW_FREQ_OPERATOR",
    MaxDeterminizedStates => "MAX_DETERMINIZED_STATES",
    MaxExpansions => "MAX_EXPANSIONS",
    MinimumShouldMatch => "MINIMUM_SHOULD_MATCH",
    Operator => "OPERATOR",
    PhraseSlop => "PHRASE_SLOP",
    PrefixLength => "PREFIX_LENGTH",
    QuoteAnalyzer => "QUOTE_ANALYZER",
    QuoteFieldSuffix => "QUOTE_FIELD_SUFFIX",
    Rewrite => "REWRITE",
    Slop => "SLOP",
    TieBreaker => "TIE_BREAKER",
    TimeZone => "TIME_ZONE",
    Type => "TYPE",
    ZeroTermsQuery => "ZERO_TERMS_QUERY",

    // Highlight and boolean-prefix matching
    Highlight => "HIGHLIGHT",
    PreTags => "PRE_TAGS",
    PostTags => "POST_TAGS",
    MatchBoolPrefix => "MATCH_BOOL_PREFIX",

    // Operators
    Div => "DIV",
    Mod => "MOD",
}

impl core::fmt::Display for Keyword {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_is_case_insensitive() {
        assert_eq!(Keyword::from_str("select"), Some(Keyword::Select));
        assert_eq!(Keyword::from_str("SeLeCt"), Some(Keyword::Select));
        assert_eq!(Keyword::from_str("match_phrase"), Some(Keyword::MatchPhrase));
        assert_eq!(Keyword::from_str("log10"), Some(Keyword::Log10));
    }

    #[test]
    fn test_unknown_word() {
        assert_eq!(Keyword::from_str("accounts"), None);
        assert_eq!(Keyword::from_str(""), None);
        assert_eq!(Keyword::from_str("MINUS"), None);
    }

    #[test]
    fn test_every_spelling_round_trips() {
        for kw in Keyword::ALL {
            assert_eq!(Keyword::from_str(kw.as_str()), Some(*kw), "{kw:?}");
            assert!(kw.as_str().len() <= MAX_KEYWORD_LEN);
        }
    }

    #[test]
    fn test_single_letter_keywords() {
        assert_eq!(Keyword::from_str("d"), Some(Keyword::D));
        assert_eq!(Keyword::from_str("t"), Some(Keyword::T));
        assert_eq!(Keyword::from_str("ts"), Some(Keyword::Ts));
        assert_eq!(Keyword::from_str("e"), Some(Keyword::E));
    }

    #[test]
    fn test_vocabulary_size() {
        assert_eq!(Keyword::ALL.len(), 303);
    }
}
