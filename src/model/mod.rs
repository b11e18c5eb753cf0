/// The model module contains the calculator core and its configuration
pub mod calculator;
pub mod report;
pub mod roles;
