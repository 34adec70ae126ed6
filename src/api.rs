//! Base client shared by every CoffeeHouse service.
//!
//! `Api` holds the credentials and the HTTP transport and knows how to send an
//! authenticated request and unwrap the `payload` of a success envelope.
//! Service clients such as [`LydiaAi`](crate::lydia::LydiaAi) are built on top.

pub mod builder;
pub mod core;
pub mod credentials;

pub use builder::ApiBuilder;
pub use core::{Api, Payload};
pub use credentials::{Credentials, DEFAULT_ENDPOINT};
