pub mod errors;
pub mod db;
pub mod truck;

#[cfg(test)]
mod tests;
