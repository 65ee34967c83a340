mod attendance;
mod general;
mod output;
mod people;

pub use attendance::*;
pub use general::*;
pub use output::*;
pub use people::*;
