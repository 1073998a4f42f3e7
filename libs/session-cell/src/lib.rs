pub mod models;
pub mod services;

pub use models::{LoginError, Session, SessionState, StorageError};
pub use services::{FileSessionStorage, MemorySessionStorage, SessionManager, SessionStorage};
