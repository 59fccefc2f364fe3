pub mod config;
pub mod error;
pub mod navigation;
pub mod role;
pub mod view;

pub use config::*;
pub use error::*;
pub use navigation::*;
pub use role::*;
pub use view::*;
