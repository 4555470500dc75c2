// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Shared HTTP utilities.
//!
//! Every outbound request to the extensions directory goes through a client
//! built here so the User-Agent stays consistent across binaries.

mod client;

pub use client::{builder, client_with_timeout, user_agent};
