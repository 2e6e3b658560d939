pub mod adapter;
pub mod backend;
pub mod dimensions;
pub mod gestures;
pub mod handoff;
pub mod media_controller;
pub mod seek;
pub mod simulated;
pub mod thumbnail;

#[cfg(test)]
mod mock_backend;

pub use adapter::*;
pub use backend::*;
pub use dimensions::*;
pub use gestures::*;
pub use handoff::*;
pub use media_controller::*;
pub use seek::*;
pub use simulated::*;
pub use thumbnail::*;
