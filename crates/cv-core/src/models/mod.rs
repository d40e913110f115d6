pub mod cv;
pub mod suggestion;
