pub mod cover;
pub mod dto;
pub mod handlers;
pub mod render;
