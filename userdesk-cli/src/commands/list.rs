use crate::output;

use clap::Args;
use color_eyre::Result;
use tracing::info;

use user_service::{User, UserSource};

/// Print the fetched users
#[derive(Args, Debug, PartialEq, Eq)]
pub struct ListArgs {
    /// Print the records as pretty JSON instead of cards
    #[arg(long)]
    pub json: bool,
}

pub async fn execute(source: &dyn UserSource, args: ListArgs) -> Result<()> {
    output::status("Fetching", &source.describe());
    let users = source.fetch_users().await?;
    info!(count = users.len(), source = %source.describe(), "Listing users");

    if args.json {
        println!("{}", render_json(&users)?);
        return Ok(());
    }

    if users.is_empty() {
        output::dim("  No users");
        return Ok(());
    }

    for user in &users {
        print_card(user);
    }
    output::dim(&format!("  {} user(s) total", users.len()));
    Ok(())
}

/// Pretty JSON in the same shape the endpoint serves
fn render_json(users: &[User]) -> Result<String> {
    Ok(serde_json::to_string_pretty(users)?)
}

fn print_card(user: &User) {
    let data = &user.data;
    output::card_header(user.id, &data.name);
    output::card_field("username", &data.handle().unwrap_or_default());
    output::card_field("email", &data.email);
    output::card_field("phone", &data.phone);
    output::card_field("web", &data.website);
    output::card_field("company", &data.company.name);
    output::card_field("city", &data.address.city);
    println!();
}
