use crate::dex::Dex;
use crate::learnset::run_learn;
use crate::search::{format_results, DexQuery, SampleRng};
use crate::weakness::run_weakness;
use std::sync::{Arc, RwLock};

/// Reply of one command invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// The one reply line(s) for this invocation, success or error text.
    Text(String),
    /// The line is not addressed to this engine; the host should keep
    /// dispatching it elsewhere.
    Suppressed,
}

const LEARN_USAGE: &str = "Usage: /learn species, move[, move...]";
const WEAKNESS_USAGE: &str = "Usage: /weakness species-or-types";
const DEXSEARCH_USAGE: &str =
    "Usage: /dexsearch parameter[, parameter...] (types, tiers, colors, abilities, moves, generations, 'all')";

/// Dispatches the dexsearch command family against a swappable dex handle.
///
/// Every invocation clones the current `Arc<Dex>` once and evaluates only
/// against that snapshot, so an administrative [`CommandHandler::swap_dex`]
/// between invocations never leaks mixed data into an in-flight query.
pub struct CommandHandler {
    dex: RwLock<Arc<Dex>>,
}

impl CommandHandler {
    pub fn new(dex: Dex) -> Self {
        Self {
            dex: RwLock::new(Arc::new(dex)),
        }
    }

    /// Replace the catalog wholesale. Takes effect for the next invocation.
    pub fn swap_dex(&self, dex: Dex) {
        *self.dex.write().unwrap() = Arc::new(dex);
    }

    /// The dex snapshot a new invocation will evaluate against.
    pub fn snapshot(&self) -> Arc<Dex> {
        self.dex.read().unwrap().clone()
    }

    /// Handle one command line. `broadcast` marks an invocation whose reply
    /// would go to a whole room; those may not combine with `all`.
    pub fn handle(&self, line: &str, broadcast: bool, rng: &mut SampleRng) -> Reply {
        let Some(rest) = line.strip_prefix('/') else {
            return Reply::Suppressed;
        };
        let (command, args) = rest.split_once(' ').unwrap_or((rest, ""));
        let args = args.trim();
        let dex = self.snapshot();

        match command.to_ascii_lowercase().as_str() {
            "dexsearch" | "ds" => {
                if args.is_empty() {
                    return Reply::Text(DEXSEARCH_USAGE.to_string());
                }
                let query = match DexQuery::parse(&dex, args) {
                    Ok(query) => query,
                    Err(err) => return Reply::Text(err.to_string()),
                };
                if broadcast && query.requests_all() {
                    return Reply::Text(
                        "A search with the parameter 'all' cannot be broadcast.".to_string(),
                    );
                }
                match query.evaluate(&dex) {
                    Ok(results) => {
                        let names = results
                            .iter()
                            .map(|species| species.name.clone())
                            .collect();
                        Reply::Text(format_results(names, query.requests_all(), rng))
                    }
                    Err(err) => Reply::Text(err.to_string()),
                }
            }
            "learn" | "learnall" => {
                if !args.contains(',') {
                    return Reply::Text(LEARN_USAGE.to_string());
                }
                let exhaustive = command.eq_ignore_ascii_case("learnall");
                match run_learn(&dex, args, exhaustive) {
                    Ok(text) => Reply::Text(text),
                    Err(err) => Reply::Text(err.to_string()),
                }
            }
            "weakness" | "weak" => {
                if args.is_empty() {
                    return Reply::Text(WEAKNESS_USAGE.to_string());
                }
                match run_weakness(&dex, args) {
                    Ok(text) => Reply::Text(text),
                    Err(err) => Reply::Text(err.to_string()),
                }
            }
            _ => Reply::Suppressed,
        }
    }
}
