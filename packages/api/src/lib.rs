//! # API crate — typed client for the remote crypto service
//!
//! The front-end never encrypts anything itself. Every operation is a single
//! JSON `POST` to the remote service, and this crate owns everything about
//! that conversation.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`models`] | [`Mode`], the request body [`CryptoRequest`] and the decoded [`CryptoOutput`] |
//! | [`validate`] | Local input checks run before any request ([`ValidationError`]) |
//! | [`error`] | [`ApiError`], everything that can go wrong once a request is attempted |
//! | [`client`] | The [`CryptoApi`] trait, its `reqwest` implementation and response decoding |
//!
//! ## Endpoints
//!
//! - `POST {base}/encrypt` → `{success, data: {encrypted, word_count}, timestamp}`
//! - `POST {base}/decrypt` → `{success, data: {decrypted, length}, timestamp}`
//!
//! Non-2xx responses may carry `{message}`, which is surfaced verbatim.

pub mod client;
pub mod error;
pub mod models;
pub mod validate;

pub use client::{decode_response, CryptoApi, HttpCryptoApi};
pub use error::ApiError;
pub use models::{CryptoOutput, CryptoRequest, Mode, Statistic};
pub use validate::ValidationError;

pub use store::config::LimitsConfig;
