pub mod app;
pub mod clipboard;
pub mod components;
pub mod highlight;
pub mod scroll;

pub use app::App;
