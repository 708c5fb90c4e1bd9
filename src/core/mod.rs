pub mod constituents;
pub mod engine;
pub mod identifiers;
pub mod profile;
pub mod roster;
pub mod sections;
pub mod terms;

#[cfg(test)]
pub(crate) mod testing;
