pub mod catalog;
pub mod chat;
pub mod filter;
pub mod matches;
pub mod storage;
pub mod swipe;
pub mod wizard;

#[cfg(target_arch = "wasm32")]
mod app;

#[cfg(target_arch = "wasm32")]
pub use app::run_app;
