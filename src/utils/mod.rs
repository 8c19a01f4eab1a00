pub mod bootstrap;
pub mod error;
pub mod logger;
pub mod validation;
