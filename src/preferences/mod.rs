pub mod impl_memory;
pub mod interface;
