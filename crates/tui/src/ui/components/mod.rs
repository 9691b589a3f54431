//! UI components: overflow navigation bar and route pages.

pub mod component;
pub mod nav_bar;
pub mod pages;

pub(crate) use component::Component;
pub use nav_bar::OverflowNavBarComponent;
pub use pages::{PageComponent, QuizComponent};
