// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Small async helpers.

use std::time::Duration;

/// Resolve after `ms` milliseconds.
///
/// For throttling and debouncing on the caller's side. Runs on the tokio
/// timer, so it needs to be awaited inside a tokio runtime. Never blocks a
/// thread and always resolves.
pub async fn wait(ms: u64) {
    tokio::time::sleep(Duration::from_millis(ms)).await;
}
