pub mod types;
pub mod validate;

pub use types::{ACTIVE_WINDOW_SECS, Fact, Sentiment, Theme};
pub use validate::{QuoteValidator, filter_verified};
