pub mod catalog;
pub mod categories;
pub mod metrics;
pub mod profile;

#[cfg(test)]
#[path = "../../tests/src_inline/model/tests.rs"]
mod tests;
