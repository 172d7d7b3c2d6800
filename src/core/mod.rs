// Core modules implementing input, decoding, and error modeling.
pub mod error;
pub mod input;
pub mod utf16;
