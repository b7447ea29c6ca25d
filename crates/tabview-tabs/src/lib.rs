//! TabView Tab Collection
//!
//! The ordered tab sequence and the selected index/item pair.
//! Before the host list exists the collection owns its entries; once the
//! host list loads, the entries move into the host's storage and the
//! collection proxies to it from then on.

mod collection;
mod entry;
mod error;
mod selection;

pub use collection::TabCollection;
pub use entry::TabItem;
pub use error::TabError;
pub use selection::{nearest_selectable, PendingSelection, SelectionState};
pub use tabview_host::TabEntry;

pub type Result<T> = std::result::Result<T, TabError>;
