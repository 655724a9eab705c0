// SPDX-License-Identifier: MPL-2.0
use iced_folio::app::{self, Flags};

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    let flags = Flags {
        catalog: args.opt_value_from_str("--catalog").unwrap_or(None),
        config_dir: args.opt_value_from_str("--config-dir").unwrap_or(None),
    };

    // A bare positional path is treated as the catalog manifest.
    let flags = Flags {
        catalog: flags.catalog.or_else(|| {
            args.finish()
                .into_iter()
                .next()
                .and_then(|s| s.into_string().ok())
        }),
        ..flags
    };

    app::run(flags)
}
