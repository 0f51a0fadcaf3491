// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Program identity printed in profile headers and the About window.

pub const TITLE: &str = "DistToPath";
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const AUTHOR: &str = env!("CARGO_PKG_AUTHORS");
pub const RELEASE_MONTH: &str = "October";
pub const RELEASE_DAY: u32 = 18;
pub const RELEASE_YEAR: u32 = 2025;

/// `DistToPath version 1.0.0 (October 18, 2025)`
pub fn version_line() -> String {
    format!(
        "{} version {} ({} {}, {})",
        TITLE, VERSION, RELEASE_MONTH, RELEASE_DAY, RELEASE_YEAR
    )
}
