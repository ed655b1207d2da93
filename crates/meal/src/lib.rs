mod command;
mod error;
mod meal;
mod query;
mod types;
pub mod validate;

pub use command::*;
pub use error::*;
pub use meal::*;
pub use query::*;
pub use types::*;
