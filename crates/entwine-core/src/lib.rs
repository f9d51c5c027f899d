pub mod driver;
pub use driver::Driver;

mod error;
pub use error::Error;

pub mod schema;

/// A Result type alias that uses Entwine's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;

pub use async_trait::async_trait;
