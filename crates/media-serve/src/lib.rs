//! Range-aware media responder.
//!
//! Serves media files by identifier with byte-range support so the player
//! element can seek without downloading the whole file. Bytes are streamed
//! from an independent read handle per request, never buffered in memory.

mod error;
mod range;
mod resolve;
mod routes;

pub use error::MediaError;
pub use range::{ByteRange, parse_range};
pub use resolve::{MediaDir, ResolvedMedia};
pub use routes::router;
