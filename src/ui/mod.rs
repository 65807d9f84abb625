mod field;
pub mod utils;

pub use field::FieldGeometry;
