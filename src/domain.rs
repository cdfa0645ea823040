//! Domain module - core result entities and fixed jogo do bicho tables
//!
//! Modern Rust module organization (Rust 2018+ style):
//! - Each module is its own file in the domain/ directory
//! - Public exports are defined here for convenience

pub mod grupos;
pub mod resultado;

// Re-export commonly used items for convenience
pub use resultado::{Premio, ResultadoSorteio, ScrapeBatchResult};
