pub mod magician;
pub mod summon;

pub use magician::Magician;
pub use summon::SummonEntry;
