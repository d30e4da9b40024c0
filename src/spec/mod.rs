// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Cabinet specification - raw input, validation and the normalized model

mod normalize;
mod raw;
mod types;

pub use normalize::normalize;
pub use raw::RawCabinetSpec;
pub use types::{CabinetSpec, Cell, Distribution, DistributionMode, Doors, HingeStyle, RoofStyle};
