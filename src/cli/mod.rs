pub mod scaffold;
pub mod size;
pub mod stats;
