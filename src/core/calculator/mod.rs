pub mod day_split;
pub mod hierarchy;
