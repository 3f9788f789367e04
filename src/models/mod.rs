// Re-export all model types from submodules
mod pokemon;

pub use pokemon::*;
