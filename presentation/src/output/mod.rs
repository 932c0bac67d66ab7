pub mod console;
pub mod export;
pub mod formatter;
pub mod structured;
