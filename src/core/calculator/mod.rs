pub mod target;
pub mod window;

pub use target::{Progress, Targets};
pub use window::Window;
