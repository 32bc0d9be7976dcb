mod loader;

pub use loader::{LoadError, load_catalog, parse_catalog};
