/// Screen modules for the browser
pub mod gallery;
pub mod tutorial;
pub mod complete;
