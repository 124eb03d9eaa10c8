// SPDX-License-Identifier: MPL-2.0
use badge_icons::application::{self, verify};
use badge_icons::config;
use std::process::ExitCode;
use tracing::warn;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let config = match config::load() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Failed to load settings: {}", err);
            return ExitCode::FAILURE;
        }
    };

    let generated = match application::generate_icons(&config) {
        Ok(generated) => generated,
        Err(err) => {
            eprintln!("Failed to create icons: {}", err);
            return ExitCode::FAILURE;
        }
    };

    for icon in &generated.icons {
        match verify::inspect_icon(&icon.path) {
            Ok(report) if report.matches(icon.size) && !report.is_blank() => {
                // The ImageMagick run only reports its closing line.
                if !generated.used_fallback() {
                    println!("Created {} ({})", icon.size.file_name(), icon.size);
                }
            }
            Ok(report) => warn!(path = %icon.path.display(), ?report, "Unexpected icon contents"),
            Err(err) => warn!(path = %icon.path.display(), %err, "Could not inspect icon"),
        }
    }

    println!("{}", generated.summary());
    ExitCode::SUCCESS
}
