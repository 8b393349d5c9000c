pub mod rom_loader;
pub mod space_invaders;

pub use space_invaders::SpaceInvadersSystem;
