mod kinds;
mod models;
mod query;

pub use kinds::*;
pub use models::*;
pub use query::*;
