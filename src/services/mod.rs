pub mod api;
pub mod render;
#[cfg(not(target_arch = "wasm32"))]
pub mod select;
pub mod session;
