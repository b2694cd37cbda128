pub mod cli;
pub mod export;
pub mod fetch;
pub mod pipeline;
pub mod process;
