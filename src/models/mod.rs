// Data models for plans, catalog templates, and profession profiles

pub mod profession;
pub mod workout;

pub use profession::*;
pub use workout::*;
