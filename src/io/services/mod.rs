//! Conversion services.

mod convert;

pub use convert::{
    ConvertOptions, ConvertResult, ConvertService, DEFAULT_SOURCE, DEFAULT_TARGET,
    default_target_for,
};
