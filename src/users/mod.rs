//! In-memory user records and the store that owns them.

pub mod error;
pub mod record;
pub mod store;
pub mod table;

pub use error::{UserStoreError, ValidationError};
pub use record::{FieldValue, NewUser, UserField, UserRecord};
pub use store::UserStore;
