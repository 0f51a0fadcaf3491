// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Profile data model.

pub mod annotation;
pub mod calibration;
pub mod profile;
pub mod selection;
