pub mod common;
pub mod generate;
pub mod tracks;
pub mod validate;
