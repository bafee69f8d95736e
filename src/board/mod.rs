//! Board model: fields and the circular map.

pub mod field;
pub mod map;

pub use field::{
    Field, FieldIndex, Property, HOUSE_PRICE, PROPERTY_PRICE, RENT, RENT_WITH_HOUSE,
};
pub use map::Map;
