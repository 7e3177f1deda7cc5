use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

/// Maximum names rendered before the result list is sampled.
pub const MAX_DISPLAYED: usize = 10;

/// Injected randomness for display sampling.
///
/// Production callers seed from entropy; tests seed explicitly so a sampled
/// rendering is reproducible.
#[derive(Debug)]
pub struct SampleRng {
    inner: StdRng,
}

impl SampleRng {
    pub fn new_random() -> Self {
        Self {
            inner: StdRng::from_rng(&mut rand::rng()),
        }
    }

    pub fn from_seed(seed: u64) -> Self {
        Self {
            inner: StdRng::seed_from_u64(seed),
        }
    }
}

/// Render a result set as the one-line reply text.
///
/// With `show_all`, or at most [`MAX_DISPLAYED`] results, every name is
/// rendered in the order given. Larger sets render an unordered sample of
/// exactly [`MAX_DISPLAYED`] names plus a trailer naming the hidden count.
pub fn format_results(mut names: Vec<String>, show_all: bool, rng: &mut SampleRng) -> String {
    if names.is_empty() {
        return "No Pokemon found.".to_string();
    }

    if show_all || names.len() <= MAX_DISPLAYED {
        return names.join(", ");
    }

    let hidden = names.len() - MAX_DISPLAYED;
    let (sampled, _) = names.partial_shuffle(&mut rng.inner, MAX_DISPLAYED);
    format!(
        "{} and {} more. Redo the search with 'all' as a search parameter to show all results.",
        sampled.join(", "),
        hidden
    )
}
