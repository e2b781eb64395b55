//
//  vector-cli
//  interactive/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Interactive terminal prompts built on `dialoguer`.
//!
//! Commands only prompt when stdin is a terminal; see [`stdin_is_tty`].

mod prompt;

pub use prompt::*;
