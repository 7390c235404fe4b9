pub mod render;
pub mod skill;
