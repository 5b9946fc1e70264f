pub mod imports;
pub mod properties;

pub use imports::imports_page;
pub use properties::properties_page;
