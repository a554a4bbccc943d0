//! Card data: definitions, the name-keyed catalog, and catalog loading.
//!
//! ## Key Types
//!
//! - `CardDefinition`: Static card data (type tags, stats, rules text)
//! - `CardCatalog`: Read-only lookup by card name
//! - `Permanent`: A card placed on a battlefield
//! - `CatalogSource`: Where a catalog document comes from

pub mod definition;
pub mod instance;
pub mod loader;
pub mod registry;

pub use definition::CardDefinition;
pub use instance::Permanent;
pub use loader::{load_catalog, source_for, CatalogLoad, CatalogSource, CatalogStatus, FileSource};
#[cfg(feature = "http")]
pub use loader::HttpSource;
pub use registry::CardCatalog;
