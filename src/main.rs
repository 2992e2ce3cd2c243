// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use propclip::{cli, commands};

fn main() -> Result<()> {
    let cli = cli::build_cli();
    let matches = cli.get_matches();

    match matches.subcommand() {
        Some(("fetch", sub)) => commands::fetch::handle(sub)?,
        Some(("comparables", sub)) => commands::comparables::handle(sub)?,
        Some(("metrics", sub)) => commands::metrics::handle(sub)?,
        Some(("analyze", sub)) => commands::analyze::handle(sub)?,
        Some(("doctor", sub)) => commands::doctor::handle(sub)?,
        _ => {
            cli::build_cli().print_help()?;
            println!();
        }
    }
    Ok(())
}
