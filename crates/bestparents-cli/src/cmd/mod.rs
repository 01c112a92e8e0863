pub mod learn;
pub mod rules;
