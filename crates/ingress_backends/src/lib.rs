pub mod api;
pub mod composite;
pub mod features;
pub mod util;

#[cfg(test)]
pub mod tests;
