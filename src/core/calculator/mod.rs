pub mod periods;
pub mod summary;
