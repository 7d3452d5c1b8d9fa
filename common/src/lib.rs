// SPDX-FileCopyrightText: 2025 All contributors
//
// SPDX-License-Identifier: GPL-2.0-or-later

//! Common Modul for the track monitor
//!
//! Provides the common data types that are used across every modul.

pub mod config;
pub mod error;
pub mod position;
pub mod region;
pub mod test_helper;
pub mod tolerance;
pub mod verdict;

#[cfg(test)]
mod tests;
