pub mod conjugation_d;
pub mod ja;
