// Bearer-token verification for the external identity provider

pub mod errors;
pub mod middleware;
pub mod models;
pub mod token;

pub use errors::*;
pub use middleware::*;
pub use models::*;
pub use token::*;
