use super::logging::init_logging;
use super::render::{render_cards, render_cart_panel, render_messages, render_navbar};
use super::setup::{Cli, Commands};
use super::shell::run_shell;
use clap::Parser;
use shopcart::api::{CartApi, CmdResult, ConfigAction};
use shopcart::error::Result;
use shopcart::init::initialize;
use shopcart::store::fs::FileStore;

struct AppContext {
    api: CartApi<FileStore>,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut ctx = init_context(&cli)?;

    match cli.command {
        Some(Commands::Add { ids }) => handle_add(&mut ctx, ids),
        Some(Commands::Dec { ids }) => handle_dec(&mut ctx, ids),
        Some(Commands::Remove { ids }) => handle_remove(&mut ctx, ids),
        Some(Commands::Card { ids }) => handle_card(&ctx, ids),
        Some(Commands::List) => handle_list(&ctx),
        Some(Commands::Badge) => handle_badge(&ctx),
        Some(Commands::Config { key, value }) => handle_config(&ctx, key, value),
        Some(Commands::Shell) => handle_shell(&mut ctx),
        None => handle_list(&ctx),
    }
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let ctx = initialize(cli.data_dir.clone())?;
    Ok(AppContext { api: ctx.api })
}

fn handle_add(ctx: &mut AppContext, ids: Vec<String>) -> Result<()> {
    let result = ctx.api.increase_quantity(&ids)?;
    print_change(&result);
    Ok(())
}

fn handle_dec(ctx: &mut AppContext, ids: Vec<String>) -> Result<()> {
    let result = ctx.api.decrease_quantity(&ids)?;
    print_change(&result);
    Ok(())
}

fn handle_remove(ctx: &mut AppContext, ids: Vec<String>) -> Result<()> {
    let result = ctx.api.remove_from_cart(&ids)?;
    print_change(&result);
    Ok(())
}

fn handle_card(ctx: &AppContext, ids: Vec<String>) -> Result<()> {
    let result = ctx.api.product_cards(&ids)?;
    print!("{}", render_cards(&result.cards));
    Ok(())
}

fn handle_list(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.cart()?;
    if let Some(summary) = &result.summary {
        print!("{}", render_cart_panel(summary));
    }
    print!("{}", render_messages(&result.messages));
    Ok(())
}

fn handle_badge(ctx: &AppContext) -> Result<()> {
    print!("{}", render_navbar(ctx.api.cart_quantity()?));
    Ok(())
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };

    let result = ctx.api.config(action)?;
    if let Some(config) = &result.config {
        if result.messages.is_empty() {
            println!("storage-key = {}", config.storage_key());
        }
    }
    print!("{}", render_messages(&result.messages));
    Ok(())
}

fn handle_shell(ctx: &mut AppContext) -> Result<()> {
    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    run_shell(&mut ctx.api, stdin.lock(), &mut stdout)
}

/// Messages for a cart change, followed by the updated navbar.
fn print_change(result: &CmdResult) {
    print!("{}", render_messages(&result.messages));
    if let Some(summary) = &result.summary {
        print!("{}", render_navbar(summary.cart_quantity));
    }
}
