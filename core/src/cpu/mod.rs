pub mod i8080;
pub use i8080::{Cpu8080, Cpu8080State, CpuState, UnknownOpcode};
