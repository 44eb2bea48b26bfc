pub mod mockito;
pub mod setup;
