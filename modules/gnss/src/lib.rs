// SPDX-FileCopyrightText: 2025 All contributors
//
// SPDX-License-Identifier: GPL-2.0-or-later

//! Position sources publishing observed positions onto the event bus.

pub mod replay_source;
