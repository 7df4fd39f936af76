//! Built-in comparison strategies.

pub mod common_name;
pub mod path;
pub mod thumbprint;

pub use common_name::CommonNameStrategy;
pub use path::PathStrategy;
pub use thumbprint::ThumbprintStrategy;
