pub mod landing;
pub mod not_found;
pub mod placeholder;

pub use landing::*;
pub use not_found::*;
pub use placeholder::*;
