// SPDX-FileCopyrightText: 2023 Jonathan Haigh <jonathanhaigh@gmail.com>
//
// SPDX-License-Identifier: MIT

pub mod cli;
pub mod error;
pub mod holder;
pub mod logging;
pub mod parser;
pub mod primitive;
pub mod results;

pub use holder::ValueHolder;
