pub mod features;
pub mod genome;
pub mod profile;
pub mod results;
pub mod track;
