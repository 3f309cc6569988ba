pub mod de;
pub mod decimal;
mod orm;
mod signal;

pub use orm::*;
pub use signal::*;
