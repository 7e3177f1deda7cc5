use std::fmt;

/// Main error type for the dexsearch query engine
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// The raw query could not be parsed into filter categories
    Parse(ParseError),
    /// A name in the query did not resolve against the dex
    Lookup(LookupError),
    /// Category bookkeeping invariant violated; unreachable in correct code
    Inconsistency(String),
}

/// Errors produced while classifying tokens and accumulating categories
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The token matched no search category
    UnrecognizedToken(String),
    /// A fifth distinct move was requested
    MoveLimitExceeded,
    /// A second distinct ability was requested
    AbilityLimitExceeded,
    /// A third distinct type was requested
    TypeLimitExceeded,
    /// The `all` modifier was the only thing in the query
    EmptyQueryWithAllFlag,
}

/// Errors produced by failed dex lookups
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    /// The specified move was not found in the dex
    UnknownMove(String),
    /// The specified species was not found in the dex
    UnknownSpecies(String),
    /// The specified type name was not found in the dex
    UnknownType(String),
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchError::Parse(err) => write!(f, "{}", err),
            SearchError::Lookup(err) => write!(f, "{}", err),
            SearchError::Inconsistency(details) => {
                write!(f, "The search could not be completed ({}).", details)
            }
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::UnrecognizedToken(token) => {
                write!(f, "'{}' could not be found in any search category.", token)
            }
            ParseError::MoveLimitExceeded => {
                write!(f, "A search cannot include more than 4 moves.")
            }
            ParseError::AbilityLimitExceeded => {
                write!(f, "A search cannot include more than one ability.")
            }
            ParseError::TypeLimitExceeded => {
                write!(f, "A search cannot include more than two types.")
            }
            ParseError::EmptyQueryWithAllFlag => {
                write!(f, "A search cannot consist of 'all' alone.")
            }
        }
    }
}

impl fmt::Display for LookupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LookupError::UnknownMove(name) => write!(f, "'{}' is not a recognized move.", name),
            LookupError::UnknownSpecies(name) => {
                write!(f, "'{}' is not a recognized species.", name)
            }
            LookupError::UnknownType(name) => write!(f, "'{}' is not a recognized type.", name),
        }
    }
}

impl std::error::Error for SearchError {}
impl std::error::Error for ParseError {}
impl std::error::Error for LookupError {}

impl From<ParseError> for SearchError {
    fn from(err: ParseError) -> Self {
        SearchError::Parse(err)
    }
}

impl From<LookupError> for SearchError {
    fn from(err: LookupError) -> Self {
        SearchError::Lookup(err)
    }
}

/// Type alias for Results using SearchError
pub type SearchResult<T> = Result<T, SearchError>;
