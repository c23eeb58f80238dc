mod app;
mod events;
mod ui;

use app::App;
use color_eyre::Result;
use user_service::UserSource;

/// Load the initial users from `source`, then hand the terminal to the user list.
///
/// The fetch happens before the terminal is switched over so a failure is reported
/// on a normal screen.
pub async fn run(source: &dyn UserSource) -> Result<()> {
    tracing::info!(source = %source.describe(), "Loading users");
    let users = source.fetch_users().await?;

    let terminal = ratatui::init();
    let result = App::new(users).run(terminal);
    ratatui::restore();
    result
}
