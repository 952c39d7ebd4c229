pub mod path;

pub use path::base_name;
