//! Pure gateway logic: prompt construction and the demo fallback

pub mod fallback;
pub mod prompt;

pub use fallback::*;
pub use prompt::*;
