pub mod code_fence;
pub mod heading;

pub use code_fence::CodeFence;
pub use heading::AtxHeading;
