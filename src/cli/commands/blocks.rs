use crate::cli::commands::session::parse_category;
use crate::cli::parser::Commands;
use crate::errors::AppResult;
use crate::ui::render::palette_view;

/// Handle the `blocks` command
pub fn handle(cmd: &Commands, colors: bool) -> AppResult<()> {
    if let Commands::Blocks { category } = cmd {
        let filter = parse_category(category.as_deref())?;
        print!("{}", palette_view(filter, colors));
    }
    Ok(())
}
