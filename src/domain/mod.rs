pub mod credential;
pub mod value_objects;

pub use credential::{key_exists, next_id, Credential};
pub use value_objects::Email;
