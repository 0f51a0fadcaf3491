// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! UI components for the DistToPath application.

pub mod canvas;
pub mod commands;
pub mod dialogs;
pub mod native_host;
pub mod properties;
pub mod toolbar;
