pub mod loaders;

pub use loaders::ConfigLoader;
