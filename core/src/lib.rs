pub mod fac;
pub mod runner;
pub mod timer;
pub mod tree;

#[cfg(test)]
mod runner_test;
