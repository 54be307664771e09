pub mod nav;
pub mod sidebar;

pub use nav::*;
pub use sidebar::*;
