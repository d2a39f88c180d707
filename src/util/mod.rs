pub mod collision;
pub mod decompose;
pub mod interval;
pub mod linalg;
pub mod log;
pub mod polygon;
