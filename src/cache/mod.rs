pub mod impl_fake;
pub mod impl_http;
pub mod impl_memory;
pub mod interface;
pub mod manager;
pub mod manifest;
