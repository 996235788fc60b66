pub mod extension;

pub use extension::ExtensionConfig;
