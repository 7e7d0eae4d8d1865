//! Photo album manager backed by an S3 bucket.

pub mod keybindings;
pub mod services;
pub mod state;
pub mod workspace;
