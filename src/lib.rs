pub mod board;
pub mod capture;
pub mod drops;
pub mod hand;
pub mod history;
pub mod movegen;
pub mod moves;
pub mod pattern;
pub mod persistence;
pub mod piece;
pub mod promotion;
pub mod square;
pub mod state;

#[cfg(target_arch = "wasm32")]
mod wasm_api;
