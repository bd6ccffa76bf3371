pub mod airport;
pub mod registry;
pub mod surveyed;
