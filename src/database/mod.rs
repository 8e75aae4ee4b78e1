pub mod manager;

pub use manager::{Database, DatabaseError};
