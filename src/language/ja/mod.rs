pub mod exceptions;
pub mod japanese;
pub mod romaji;
pub mod stems;
pub mod transforms;
