pub mod layout;
pub mod sidebar;

pub use layout::*;
pub use sidebar::*;
