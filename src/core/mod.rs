pub mod format;
pub mod rep;
pub mod classify;
pub mod hexfloat;
pub mod arith;
pub mod accuracy;
pub mod extremum;

#[cfg(test)]
#[path = "tests/mod.rs"]
mod tests;
