pub mod engine;
pub mod keywords;
pub mod matcher;

#[cfg(test)]
mod tests;
