//! Listing a permission group catalog: loading it, ranking groups, finding the tracks
//! each group is on, and rendering interactive lines.

pub use grouplist_state;
pub use grouplist_state::gs;

pub mod catalog;
pub mod command;
pub mod listing;
pub mod locale;
pub mod membership;
pub mod rank;
pub mod render;
pub mod sink;
pub mod text;

pub use catalog::{Catalog, CatalogSnapshot};
pub use command::{CommandResult, ListGroupsCommand};
pub use listing::{LoadError, list_groups, list_snapshot};
pub use locale::{LocaleManager, Message};
pub use render::RenderedLine;
pub use sink::Sink;
pub use text::Component;
