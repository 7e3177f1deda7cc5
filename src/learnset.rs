use crate::dex::{to_id, Dex, LearnCheck};
use crate::errors::{LookupError, ParseError, SearchResult};
use crate::markup::{bold, link};
use schema::{MoveData, MoveSource};

/// How many same-generation/method source entries are shown before a run is
/// truncated with an ellipsis.
const MAX_SOURCES_PER_RUN: usize = 3;

fn dex_page(species_name: &str) -> String {
    format!("http://www.smogon.com/bw/pokemon/{}", to_id(species_name))
}

/// Answer a learnset query: one species followed by one or more moves.
///
/// Unknown species or move names abort with a lookup error. If every move is
/// legal the reply enumerates each move's sources, truncated per run unless
/// `exhaustive` was requested; the first illegal move stops the check and the
/// reply reports the species cannot learn the requested moves.
pub fn run_learn(dex: &Dex, target: &str, exhaustive: bool) -> SearchResult<String> {
    let mut parts = target.split(',');
    let species_name = parts.next().unwrap_or("").trim();
    let species = dex
        .species(species_name)
        .ok_or_else(|| LookupError::UnknownSpecies(species_name.to_string()))?;

    let mut requested: Vec<&MoveData> = Vec::new();
    for move_name in parts {
        let move_name = move_name.trim();
        if move_name.is_empty() {
            continue;
        }
        let move_data = dex
            .get_move(move_name)
            .ok_or_else(|| LookupError::UnknownMove(move_name.to_string()))?;
        requested.push(move_data);
    }
    if requested.is_empty() {
        return Err(ParseError::UnrecognizedToken(target.trim().to_string()).into());
    }

    let joined = requested
        .iter()
        .map(|move_data| move_data.name.as_str())
        .collect::<Vec<_>>()
        .join(", ");
    let anchor = link(&dex_page(&species.name), &species.name);

    let mut legal: Vec<(&str, &[MoveSource])> = Vec::new();
    for move_data in &requested {
        match dex.check_learnset(&to_id(&move_data.name), species) {
            LearnCheck::Legal(sources) => legal.push((move_data.name.as_str(), sources)),
            LearnCheck::Illegal => {
                return Ok(format!("{} {} learn {}.", anchor, bold("cannot"), joined));
            }
        }
    }

    let mut reply = format!("{} {} learn {}.", anchor, bold("can"), joined);
    for (move_name, sources) in legal {
        reply.push('\n');
        reply.push_str(&format_sources(move_name, sources, exhaustive));
    }
    Ok(reply)
}

/// Render one move's source list, grouping consecutive entries that share a
/// generation and method into a single labelled run.
fn format_sources(move_name: &str, sources: &[MoveSource], exhaustive: bool) -> String {
    let mut parts: Vec<String> = Vec::new();
    let mut index = 0;

    while index < sources.len() {
        let gen = sources[index].gen;
        let method = sources[index].method;
        let mut details: Vec<String> = Vec::new();

        while index < sources.len() && sources[index].gen == gen && sources[index].method == method
        {
            if let Some(detail) = &sources[index].detail {
                details.push(detail.clone());
            }
            index += 1;
        }

        let label = format!("Gen {} {}", gen, method.label());
        if details.is_empty() {
            parts.push(label);
            continue;
        }

        let truncated = !exhaustive && details.len() > MAX_SOURCES_PER_RUN;
        if truncated {
            details.truncate(MAX_SOURCES_PER_RUN);
            details.push("...".to_string());
        }
        parts.push(format!("{}: {}", label, details.join(", ")));
    }

    format!("{}: {}", bold(move_name), parts.join("; "))
}
