//! Scripted HTTP response delivery for test-double web servers.

pub mod config;
pub mod observability;
pub mod response;

pub use config::{load_script, ResponseScript};
pub use response::{
    BodyStream, DisruptionPolicy, HeaderList, MockResponse, Pacer, ResponseError, ScriptedResponse,
    StreamResponse, ThreadPacer,
};
