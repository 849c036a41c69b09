pub mod credentials;
pub mod extractor;
pub mod session;
