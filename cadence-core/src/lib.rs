pub mod cli;
pub mod conf;
pub mod dump;
pub mod logging;
pub mod parse;
pub mod session;
pub mod stats;
