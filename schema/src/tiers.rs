use serde::{Deserialize, Serialize};
use std::fmt;
use strum::EnumString;

/// Competitive-viability classification of a species.
///
/// `Cap` marks community-created species and `Illegal` marks records that can
/// never appear in play; both get special handling during catalog filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Hash, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum Tier {
    Uber,
    OU,
    BL,
    UU,
    BL2,
    RU,
    NU,
    NFE,
    LC,
    #[strum(serialize = "CAP")]
    Cap,
    Illegal,
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tier::Cap => write!(f, "CAP"),
            other => write!(f, "{:?}", other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_tier_keywords_parse_case_insensitively() {
        assert_eq!(Tier::from_str("ou"), Ok(Tier::OU));
        assert_eq!(Tier::from_str("Uber"), Ok(Tier::Uber));
        assert_eq!(Tier::from_str("bl2"), Ok(Tier::BL2));
        assert_eq!(Tier::from_str("cap"), Ok(Tier::Cap));
        assert!(Tier::from_str("anythinggoes").is_err());
    }

    #[test]
    fn test_display_matches_keyword() {
        assert_eq!(Tier::OU.to_string(), "OU");
        assert_eq!(Tier::Cap.to_string(), "CAP");
        assert_eq!(Tier::Illegal.to_string(), "Illegal");
    }
}
