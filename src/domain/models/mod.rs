mod action;
mod backend;
mod error;
mod event;
mod ingredient;
mod loading;
mod notification;
mod prompt;
mod recipe;
mod request_state;
mod textarea;

pub use action::*;
pub use backend::*;
pub use error::*;
pub use event::*;
pub use ingredient::*;
pub use loading::*;
pub use notification::*;
pub use prompt::*;
pub use recipe::*;
pub use request_state::*;
pub use textarea::*;
