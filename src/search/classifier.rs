use crate::dex::{to_id, Dex};
use crate::errors::{LookupError, ParseError, SearchError, SearchResult};
use schema::{PokemonColor, PokemonType, Tier};
use std::str::FromStr;

/// One raw query token resolved into exactly one filter kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// Move id, already normalized against the dex
    Move(String),
    /// Ability id, already normalized against the dex
    Ability(String),
    Tier(Tier),
    Color(PokemonColor),
    Generation(u8),
    All,
    Type(PokemonType),
}

pub const MIN_GENERATION: u8 = 1;
pub const MAX_GENERATION: u8 = 5;

/// Classify a trimmed token, first match wins. The priority order is fixed:
/// move, ability, tier, colour, generation number, `all`, `" type"` suffix.
pub fn classify(dex: &Dex, raw_token: &str) -> SearchResult<Token> {
    let token = raw_token.trim();

    if dex.get_move(token).is_some() {
        return Ok(Token::Move(to_id(token)));
    }
    if dex.get_ability(token).is_some() {
        return Ok(Token::Ability(to_id(token)));
    }
    if let Ok(tier) = Tier::from_str(token) {
        return Ok(Token::Tier(tier));
    }
    if let Ok(color) = PokemonColor::from_str(token) {
        return Ok(Token::Color(color));
    }
    if let Ok(gen) = token.parse::<u8>() {
        if (MIN_GENERATION..=MAX_GENERATION).contains(&gen) {
            return Ok(Token::Generation(gen));
        }
    }
    if to_id(token) == "all" {
        return Ok(Token::All);
    }
    if let Some(type_name) = token.to_ascii_lowercase().strip_suffix(" type") {
        return match dex.get_type(type_name) {
            Some(type_) => Ok(Token::Type(type_)),
            None => Err(LookupError::UnknownType(type_name.trim().to_string()).into()),
        };
    }

    Err(SearchError::Parse(ParseError::UnrecognizedToken(
        token.to_string(),
    )))
}
