mod native;

pub use native::*;
