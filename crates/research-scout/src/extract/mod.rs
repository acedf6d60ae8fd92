//! Field extraction from portal and group-site pages.
//!
//! Every function is pure over a parsed [`Page`](crate::html::Page) and
//! best-effort per field: missing markup yields `None` or an empty
//! collection, never an error. Selectors are tied to the current markup of
//! each site.

pub mod profile;
pub mod publications;
pub mod roster;

pub use profile::profile_details;
pub use publications::{
    RecencyWindow, publication_details, publication_entries, recent_links, recent_titles,
};
pub use roster::{bio_details, roster_entries};
