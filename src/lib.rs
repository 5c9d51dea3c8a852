pub mod core;
pub mod dom;
pub mod features;
pub mod search;
pub mod site;

// --- Primary core exports ---
pub use core::config;
pub use core::types;
pub use core::AppState;

// --- Feature module shortcuts ---
pub use features::{antibot, share, waitlist};
