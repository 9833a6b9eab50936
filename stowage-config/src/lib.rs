// Configuration for Stowage: which key-value store holds the settings

pub mod env;
pub mod error;
pub mod loader;
pub mod settings;
pub mod validation;

pub use env::EnvLoader;
pub use error::{ConfigError, Result};
pub use loader::{ConfigLoader, FileFormat};
pub use settings::{StoreBackend, StoreSettings};
pub use validation::{ConfigValidator, Validate};
