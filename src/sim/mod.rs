pub mod driver;
pub mod job;

pub use driver::Sim;
pub use job::generate_processes;
