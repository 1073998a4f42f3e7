pub mod board;

pub use board::NotificationBoard;
