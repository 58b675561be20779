//! Common types shared by all resources

pub mod draft_error;
pub mod envelope;
pub mod iso_date;
pub mod lenient;

// Re-exports
pub use draft_error::DraftError;
pub use envelope::{Envelope, Payload};
