pub mod internal;
pub mod state;

#[cfg(test)]
pub mod testing;
