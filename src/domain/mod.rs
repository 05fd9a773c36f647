pub mod address;
pub mod position;

pub use address::Address;
pub use position::GeoInformation;
