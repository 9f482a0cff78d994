use anyhow::Result;
use clap::Parser;

use compare_table::cli::{CliArgs, Command, RenderArgs, ThemeArgs};
use compare_table::pipeline::render_to_file;
use compare_table::theme::ThemeController;

fn main() -> Result<()> {
    compare_table::tracing::init();

    let args = CliArgs::parse();
    match args.command {
        Command::Render(render) => run_render(render),
        Command::Theme(theme) => {
            let controller = ThemeController::init(theme.store(), theme.system_prefers_dark());
            println!("{} {}", controller.attribute(), controller.indicator_glyph());
            Ok(())
        }
        Command::ToggleTheme(theme) => run_toggle(theme),
    }
}

fn run_render(args: RenderArgs) -> Result<()> {
    let controller =
        ThemeController::init(args.theme.store(), args.theme.system_prefers_dark());
    let config = args.into_config();

    render_to_file(&config.sources, &config.output, &config.options(controller.mode()))?;
    println!("{}", config.output.display());

    if config.open {
        if let Err(e) = open::that(&config.output) {
            tracing::warn!("Failed to open {}: {}", config.output.display(), e);
        }
    }
    Ok(())
}

fn run_toggle(args: ThemeArgs) -> Result<()> {
    let mut controller = ThemeController::init(args.store(), args.system_prefers_dark());
    controller.toggle();
    println!("{} {}", controller.attribute(), controller.indicator_glyph());
    Ok(())
}
