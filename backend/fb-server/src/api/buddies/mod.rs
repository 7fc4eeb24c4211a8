#[allow(clippy::module_inception)]
pub mod buddies;
pub mod buddy_list_response;
