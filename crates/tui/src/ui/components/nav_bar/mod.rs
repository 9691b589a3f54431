//! Horizontal navigation bar with an overflow menu.
//!
//! The bar observes the width of its row through a
//! [`WidthObserver`](crate::ui::observer::WidthObserver), measures each entry
//! in its natural single-line size, and shows as many leading entries inline
//! as fit next to the space reserved for the "More" trigger. The remaining
//! entries are listed in a popup menu opened from that trigger.
//!
//! - `packer`: the pure width-packing walk
//! - `state`: measurement, partition, menu and focus state
//! - `nav_bar_component`: rendering and input handling
//!
//! # Usage
//!
//! ```ignore
//! let observer = LayoutObserver::new();
//! let mut state = OverflowNavState::new(items, 8, 1);
//! state.mount(&observer, "nav.bar");
//! // render pass:
//! observer.report("nav.bar", row_width);
//! state.relayout(&measure_entry);
//! ```

mod nav_bar_component;
pub mod packer;
mod state;

pub use nav_bar_component::OverflowNavBarComponent;
pub use packer::visible_count;
pub use state::{NavFocus, OverflowNavState};
