pub mod entities;
pub mod helpers;
pub mod ports;
pub mod services;

pub use entities::*;
pub use ports::*;
