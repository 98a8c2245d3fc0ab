//! Page components mounted at page-ready

pub mod jumbotron;

pub use jumbotron::Jumbotron;
