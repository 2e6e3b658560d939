pub mod asset;
pub mod clock;
pub mod config;
pub mod error;
pub mod session;


pub use asset::*;
pub use clock::*;
pub use config::*;
pub use error::*;
pub use session::*;
