pub mod aggregate;
pub mod debug;
pub mod districts;
pub mod export;
pub mod fetch;
pub mod models;
pub mod municipalities;
pub mod parser;
pub mod results;
