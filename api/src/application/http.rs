pub mod detection;
pub mod health;
pub mod history;
pub mod search;
pub mod server;

#[cfg(test)]
pub mod test;
