// SPDX-License-Identifier: MPL-2.0
use iced_herald::app::{self, Flags};
use iced_herald::config;

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    if let Some(dir) = args
        .opt_value_from_str::<_, String>("--config-dir")
        .unwrap()
    {
        std::env::set_var(config::ENV_CONFIG_DIR, dir);
    }
    let flags = Flags {
        theme: args.opt_value_from_str("--theme").unwrap(),
    };

    app::run(flags)
}
