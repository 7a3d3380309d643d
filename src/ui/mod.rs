pub mod messages;
pub mod timer;
