mod stop;
pub use stop::*;
