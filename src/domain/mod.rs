pub mod catalog;
pub mod menu;
pub mod model;
pub mod ports;
