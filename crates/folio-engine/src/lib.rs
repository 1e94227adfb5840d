//! Filter, sort and navigation engine for the Folio catalog browser.
//!
//! ## Flow
//!
//! ```text
//! UI event (keystroke, dropdown, header click)
//!        │
//!        ▼
//! FilterCriteria / SortSpec updated on the session
//!        │
//!        ▼
//! filter(store) ──► sort(survivors) ──► View (replaced wholesale)
//!        │
//!        ▼
//! NavigationCursor re-resolved by record id
//! ```
//!
//! Everything here is synchronous and pure apart from `CatalogSession`,
//! which owns the state explicitly.

pub mod display;
pub mod filter;
pub mod navigation;
pub mod options;
pub mod session;
pub mod sort;
pub mod view;

pub use display::{count_label, rarity_class, reward_label};
pub use filter::{filter, FilterCriteria};
pub use navigation::{Affordances, NavigationCursor};
pub use options::FilterOptions;
pub use session::CatalogSession;
pub use sort::{compare, sort};
pub use view::View;
