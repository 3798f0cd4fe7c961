//! Cross-cutting helpers shared by the registry crates.

pub mod utils;
