pub mod access;
pub mod escape;

pub use access::*;
pub use escape::*;
