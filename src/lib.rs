pub mod config;
pub mod errors;
pub mod quiz;

#[cfg(test)]
pub mod test_utils;
