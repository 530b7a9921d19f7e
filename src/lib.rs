// SPDX-FileCopyrightText: 2024 Ohin "Kazani" Taylor <kazani@kazani.dev>
// SPDX-License-Identifier: MIT

pub mod config;
pub mod error;
pub mod html;
pub mod metadata;
pub mod nav;
pub mod page;
pub mod site;
pub mod template;
