pub mod composite;
pub mod counter;
pub mod runner;
pub mod workers;

