pub mod parser;
pub mod schema;
pub mod validator;

pub use parser::*;
pub use schema::*;
pub use validator::*;
