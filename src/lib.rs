// openmwmm: OpenMW Mod Manager
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Library root.
//!
//! # Crate Architecture
//!
//! ```text
//!                        main.rs
//!                           |
//!                +----------+----------+
//!                v                     v
//!             cli (clap)          cmd (handlers)
//!                |          list / edit / export
//!                +----------+----------+
//!                           v
//!              ,---------------------------,
//!              |         manager           |
//!              |   tree + conflict state   |
//!              '--+-----------+--------+---'
//!                 |           |        |
//!                 v           v        v
//!               model     transfer  conflict
//!             ModTree    payload,   index,
//!             NodeId     moves      selector
//!                 |
//!                 v
//!              persist   mods.json, openmw.cfg
//!
//!   +-----------------------------------------+
//!   |  config   TOML, env, --set overrides    |
//!   +-----------------------------------------+
//!   |  foundation   error, logging, utility   |
//!   +-----------------------------------------+
//! ```

pub mod cli;
pub mod cmd;
pub mod config;
pub mod conflict;
pub mod error;
pub mod logging;
pub mod manager;
pub mod model;
pub mod persist;
pub mod transfer;
pub mod utility;
