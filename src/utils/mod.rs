// Utility modules shared by the engines

pub mod date;
pub mod interval;
