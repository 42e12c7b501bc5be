//! Application services for task board orchestration.

mod board;
mod breakdown;

pub use board::{
    CompleteTaskRequest, CreateTaskRequest, TaskBoardError, TaskBoardResult, TaskBoardService,
};
pub use breakdown::{BreakdownError, BreakdownResult, BreakdownService};
