//! Clinic directory admin dashboard: an axum server that renders the
//! dashboard and turns each browser event into a command on the cells.

pub mod handlers;
pub mod page;
pub mod router;
pub mod state;

pub use router::create_router;
pub use state::AdminState;
