//! Database layer - connection pool, sessions, schema and repositories
//!
//! # Design Principles
//!
//! - One pool per process, one session (transaction) per request
//! - Sessions are released on drop; uncommitted work rolls back
//! - Repositories borrow a session connection and run a single statement

pub mod pool;
pub mod repos;
pub mod schema;
pub mod session;

pub use pool::create_pool;
pub use repos::*;
pub use session::Session;
