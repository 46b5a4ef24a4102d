pub mod errors;
pub mod db;
pub mod term;

#[cfg(test)]
mod tests;
