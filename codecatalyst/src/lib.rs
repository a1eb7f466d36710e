/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Client for Amazon CodeCatalyst.
//!
//! CodeCatalyst authenticates with personal access tokens (PATs) rather than
//! signed credentials, so the client is configured with a bearer-token
//! provider and a single regionless endpoint.
//!
//! ```no_run
//! use codecatalyst::{Client, Config};
//! use codecatalyst::input::GetProjectInput;
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let conf = Config::builder().access_token("pat-secret").build();
//! let client = Client::from_conf(conf);
//! let project = client
//!     .get_project(
//!         GetProjectInput::builder()
//!             .space_name("my-space")
//!             .name("my-project")
//!             .build(),
//!     )
//!     .await?;
//! println!("{:?}", project.display_name);
//! # Ok(())
//! # }
//! ```
#![warn(missing_debug_implementations, rustdoc::all)]

mod client;
pub mod config;
pub mod error;
pub mod input;
pub mod model;
pub mod operation;
pub mod output;

pub use client::Client;
pub use config::Config;
pub use error::Error;
pub use restwire_client::{RequestOverrideConfig, SdkError};
