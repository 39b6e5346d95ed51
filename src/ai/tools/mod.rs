pub mod calendar;
pub use calendar::CalendarTool;

pub mod time;
pub use time::{CurrentTimeTool, FutureTimeTool};

pub mod registry;
pub use registry::{ToolRegistry, calendar_tools};
