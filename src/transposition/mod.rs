pub mod enharmonic;
pub mod scale_builder;

pub use enharmonic::spell;
pub use scale_builder::{build, build_named};
