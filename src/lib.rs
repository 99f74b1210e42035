pub mod client;
pub mod utils;
