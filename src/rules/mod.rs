// SPDX-FileCopyrightText: 2026 Sébastien Helleu <flashcode@flashtux.org>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Implementation of all rules.

pub mod duplicates;
pub mod empty;
pub mod encoding;
pub mod escapes;
pub mod junk;
pub mod plural_tags;
pub mod rule;
