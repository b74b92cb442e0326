//! Domain model types (pure).

pub mod error;
pub mod key_action;
pub mod record;

pub use error::{InputError, InvalidConfiguration};
pub use key_action::KeyAction;
pub use record::Record;
