pub mod forms;
pub mod render;
pub mod store;

pub use forms::DirectoryService;
pub use store::DataStore;
