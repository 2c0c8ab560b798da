pub mod analysis;
pub mod vitals;
