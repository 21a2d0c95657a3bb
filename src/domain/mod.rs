pub mod changes;
pub mod sequence;
pub mod sizes;
pub mod snapshot;
