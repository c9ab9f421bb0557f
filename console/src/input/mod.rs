pub mod entry;
pub mod example;
pub mod prompt;
