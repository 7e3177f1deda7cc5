use crate::errors::{LookupError, ParseError, SearchError};
use crate::search::classifier::{classify, Token};
use crate::search::tests::common::sample_dex;
use pretty_assertions::assert_eq;
use rstest::rstest;
use schema::{PokemonColor, PokemonType, Tier};

#[rstest]
#[case("Surf", Token::Move("surf".to_string()))]
#[case("  thunderbolt  ", Token::Move("thunderbolt".to_string()))]
#[case("Quiver Dance", Token::Move("quiverdance".to_string()))]
#[case("Intimidate", Token::Ability("intimidate".to_string()))]
#[case("flash fire", Token::Ability("flashfire".to_string()))]
#[case("ou", Token::Tier(Tier::OU))]
#[case("Uber", Token::Tier(Tier::Uber))]
#[case("cap", Token::Tier(Tier::Cap))]
#[case("red", Token::Color(PokemonColor::Red))]
#[case("3", Token::Generation(3))]
#[case("all", Token::All)]
#[case("ALL", Token::All)]
#[case("fire type", Token::Type(PokemonType::Fire))]
#[case("Flying Type", Token::Type(PokemonType::Flying))]
fn test_tokens_classify_into_their_category(#[case] raw: &str, #[case] expected: Token) {
    let dex = sample_dex();
    assert_eq!(classify(&dex, raw), Ok(expected));
}

#[rstest]
#[case("0")]
#[case("6")]
#[case("blorp")]
#[case("")]
fn test_unmatched_tokens_are_rejected(#[case] raw: &str) {
    let dex = sample_dex();
    assert_eq!(
        classify(&dex, raw),
        Err(SearchError::Parse(ParseError::UnrecognizedToken(
            raw.trim().to_string()
        )))
    );
}

#[test]
fn test_type_suffix_with_unknown_name_is_a_lookup_error() {
    let dex = sample_dex();
    assert_eq!(
        classify(&dex, "fairy type"),
        Err(SearchError::Lookup(LookupError::UnknownType(
            "fairy".to_string()
        )))
    );
}

#[test]
fn test_move_lookup_outranks_ability_lookup() {
    use crate::dex::Dex;
    use schema::{AbilityData, MoveCategory, MoveData};

    // A name registered as both a move and an ability must classify as the
    // move, since move lookup is first in the priority order.
    let overlap_move = MoveData {
        name: "Howl".to_string(),
        move_type: PokemonType::Normal,
        category: MoveCategory::Status,
        base_power: 0,
        accuracy: 100,
        max_pp: 40,
    };
    let overlap_ability = AbilityData {
        name: "Howl".to_string(),
        description: String::new(),
    };
    let dex = Dex::from_parts(Vec::new(), vec![overlap_move], vec![overlap_ability]);

    assert_eq!(classify(&dex, "Howl"), Ok(Token::Move("howl".to_string())));
}

#[test]
fn test_bare_type_name_without_suffix_is_rejected() {
    // Only the explicit `" type"` suffix classifies a type.
    let dex = sample_dex();
    assert_eq!(
        classify(&dex, "dragon"),
        Err(SearchError::Parse(ParseError::UnrecognizedToken(
            "dragon".to_string()
        )))
    );
}
