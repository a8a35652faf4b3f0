pub mod batch;
pub mod consume;
pub mod mix;
pub mod reference;
