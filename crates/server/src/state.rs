use docsum_core::Config;
use docsum_summarize::Summarizer;

/// Shared, read-only state handed to every request.
///
/// Holds configuration only; each request builds its own frequency model.
pub struct AppState {
    pub config: Config,
    pub summarizer: Summarizer,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            summarizer: Summarizer::default(),
        }
    }
}
