pub mod cli;
pub mod config;
pub mod emoji;
pub mod paths;
pub mod stupefy;
pub mod transform;
pub mod whitespace;
