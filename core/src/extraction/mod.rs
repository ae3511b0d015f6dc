pub mod sequence_name;
pub mod tags;

pub use sequence_name::read_sequence_name;
pub use tags::*;
