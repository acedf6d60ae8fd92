//! Data models for scraped researchers and publications.
//!
//! Absent data is `None` or an empty collection and is omitted from JSON,
//! so writing a model and reading it back loses nothing.

mod keyed;
mod publication;
mod researcher;

pub use keyed::NameKeyed;
pub use publication::{Publication, PublicationDetails, PublicationEntry};
pub use researcher::{BioDetails, ProfileDetails, Researcher, RosterEntry, Unresolved};

/// Publications per researcher name, in input order.
pub type PublicationsReport = NameKeyed<Vec<Publication>>;

/// Expertise summary per researcher name.
pub type ExpertiseSummaries = NameKeyed<String>;
