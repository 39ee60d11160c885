//! HTTP adapter

mod reqwest_generator;

pub use reqwest_generator::ReqwestRequestGenerator;
