//! Content views shown below the navigation bar, one per route.

mod page_component;
mod quiz_component;

pub use page_component::PageComponent;
pub use quiz_component::QuizComponent;
