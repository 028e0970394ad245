// SimpleBrowser services
// Services are stateless or configuration-only: page fetching, title extraction, settings.

pub mod http_fetcher;
pub mod settings_engine;
pub mod title_extractor;
