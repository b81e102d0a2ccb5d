pub mod actions;
pub mod events;
mod session;

pub use session::*;
