//! Page planning for the paginated catalog document

mod planner;
mod toc;

pub use planner::{plan, CategoryPlacement, PageMap, PlannerOptions};
pub use toc::TocItem;
