pub mod row;
pub mod session;
pub mod task_node;
