//! Core library for the `weather` CLI.
//!
//! This crate defines:
//! - Loading the OpenWeather credential
//! - Building the current-weather query URL
//! - Fetching and decoding the response behind the `WeatherFetcher` trait
//! - Classifying condition codes and rendering the output line
//!
//! It is used by `weather-cli`, but can also be reused by other binaries or services.

pub mod config;
pub mod display;
pub mod error;
pub mod lookup;
pub mod model;
pub mod provider;
pub mod query;

pub use config::{Credential, Settings, load_api_key};
pub use display::{DisplayParams, Palette, Tint, classify, render};
pub use error::WeatherError;
pub use model::{Units, WeatherRequest, WeatherResponse};
pub use provider::WeatherFetcher;
pub use query::{QueryUrl, build_query};
