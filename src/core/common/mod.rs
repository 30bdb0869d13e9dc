pub mod error;
pub use error::OxiannError;

#[cfg(test)]
mod tests {
    mod error_tests;
}
