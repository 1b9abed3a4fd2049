pub mod lego_set;
pub mod loaders;

pub use lego_set::LegoSet;
pub use loaders::load_collection;
