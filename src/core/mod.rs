// Core modules implementing the escape/unescape transforms and error modeling.
pub mod decoder;
pub mod encoder;
pub mod error;
