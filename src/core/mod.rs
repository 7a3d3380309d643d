pub mod calculator;
pub mod logic;
pub mod record;
pub mod summary;
