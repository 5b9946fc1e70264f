pub mod page;
pub mod property;

pub use page::Page;
pub use property::{NaturalKey, NewProperty, NewPropertyImage, PropertyRecord};
