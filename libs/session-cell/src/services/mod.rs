pub mod session;
pub mod storage;

pub use session::SessionManager;
pub use storage::{FileSessionStorage, MemorySessionStorage, SessionStorage};
