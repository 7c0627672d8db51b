use anyhow::{bail, Context, Result};
use skydesk_console::delete_flow::{DELETE_PROMPT_BODY, DELETE_PROMPT_TITLE};
use skydesk_console::present::format_route;
use skydesk_console::{BookingConsole, DetailView};
use std::io::{self, BufRead, Write};

use crate::args::Command;
use crate::render;

pub async fn run(console: &BookingConsole, command: Command) -> Result<()> {
    match command {
        Command::List { search, page, page_size } => list(console, search, page, page_size).await,
        Command::Stats { json } => stats(console, json).await,
        Command::Show { id } => show(console, &id).await,
        Command::Delete { id, yes } => delete(console, &id, yes).await,
    }
}

async fn list(
    console: &BookingConsole,
    search: String,
    page: usize,
    page_size: Option<usize>,
) -> Result<()> {
    let loaded = console.mount().await;

    if let Some(size) = page_size {
        console.set_page_size(size).await?;
    }
    console.set_search_term(search).await;
    console.set_page(page).await;

    let state = console.state().await;
    println!("{}\n", render::stats_line(&state.stats));
    print!("{}", render::table(&state));

    loaded.map(|_| ()).context("Could not load bookings")
}

async fn stats(console: &BookingConsole, json: bool) -> Result<()> {
    console.mount().await.context("Could not load bookings")?;
    let stats = console.stats().await;
    if json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
    } else {
        println!("{}", render::stats_line(&stats));
    }
    Ok(())
}

async fn show(console: &BookingConsole, id: &str) -> Result<()> {
    let result = console.open_detail(id).await;
    {
        let state = console.state().await;
        match state.detail.as_ref().map(|slot| slot.view()) {
            Some(DetailView::Loaded(booking)) => print!("{}", render::detail(booking)),
            Some(DetailView::Failed(text)) => eprintln!("{}", text),
            Some(DetailView::Loading) | None => {}
        }
    }
    console.close_detail().await;
    result.map(|_| ()).with_context(|| format!("Could not load booking {}", id))
}

async fn delete(console: &BookingConsole, id: &str, yes: bool) -> Result<()> {
    console.mount().await.context("Could not load bookings")?;
    console.request_delete(id).await?;

    if !yes {
        let route = {
            let state = console.state().await;
            state.delete.target().map(format_route).unwrap_or_default()
        };
        if !confirm(&format!("{} ({} {})", DELETE_PROMPT_TITLE, id, route))? {
            console.cancel_delete().await?;
            println!("Delete cancelled");
            return Ok(());
        }
    }

    match console.confirm_delete().await {
        Ok(booking) => {
            println!("Deleted booking {}", booking.id);
            println!("{}", render::stats_line(&console.stats().await));
            Ok(())
        }
        Err(err) => bail!("Failed to delete booking. Please try again. ({})", err.display_message()),
    }
}

fn confirm(title: &str) -> Result<bool> {
    let mut stdout = io::stdout();
    write!(stdout, "{}\n{} [y/N] ", title, DELETE_PROMPT_BODY)?;
    stdout.flush()?;

    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;
    Ok(matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"))
}
