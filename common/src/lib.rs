pub mod capabilities;
pub mod hints;
pub mod notification;
pub mod proxy;
pub mod utils;
