//! Configuration module for the portfolio app.

// Can all be private because we re-export what's needed.
mod debug;
mod persistence;
mod profile;
mod timeline;
mod typewriter;
mod webring;

// Re-export commonly used items
pub use debug::DF;
pub use persistence::PERSISTENCE;
pub use profile::{Experience, LinkItem, PROFILE};
pub use timeline::TIMELINE;
pub use typewriter::TYPEWRITER;
pub use webring::{WEBRING, placeholder_next_url, placeholder_prev_url};
