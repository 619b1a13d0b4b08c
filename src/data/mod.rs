// Static tables: exercise catalog and profession reference set.
// Loaded once at process start from embedded data, never mutated.

pub mod catalog;
pub mod professions;
