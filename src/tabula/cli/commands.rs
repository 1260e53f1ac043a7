use super::print::{print_error, print_form, print_messages, print_page};
use super::setup::{Cli, ShellCommand, ShellLine};
use super::viewport::{FixedViewport, Layout, TerminalViewport, Viewport};
use clap::{CommandFactory, Parser};
use directories::ProjectDirs;
use std::io::{BufRead, IsTerminal, Write};
use std::path::PathBuf;
use tabula::api::{sample_fields, Query, SortKey, TableApi};
use tabula::config::{TableConfig, CONFIG_FILENAME};
use tabula::error::{Result, TableError};
use tabula::model::{Field, RecordId};
use tabula::store::memory::InMemoryStore;
use tracing_subscriber::EnvFilter;

struct AppContext {
    api: TableApi<InMemoryStore>,
    query: Query,
    viewport: Box<dyn Viewport>,
    compact_below: u16,
}

enum Flow {
    Continue,
    Quit,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut ctx = init_context(&cli)?;
    let interactive = std::io::stdin().is_terminal();

    render_page(&ctx)?;

    let stdin = std::io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        if interactive {
            prompt(&ctx)?;
        }
        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;
        let words: Vec<&str> = line.split_whitespace().collect();
        if words.is_empty() {
            continue;
        }

        let command = match ShellLine::try_parse_from(words) {
            Ok(parsed) => parsed.command,
            Err(e) => {
                print_error(e.to_string().lines().next().unwrap_or("Invalid command"));
                continue;
            }
        };

        match dispatch(&mut ctx, command, &line) {
            Ok(Flow::Continue) => {}
            Ok(Flow::Quit) => break,
            Err(e) => report(&ctx, e),
        }
    }

    Ok(())
}

fn init_logging(verbose: bool) {
    let default = if verbose { "tabula=debug" } else { "tabula=warn" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)))
        .with_writer(std::io::stderr)
        .init();
}

fn config_path(cli: &Cli) -> Option<PathBuf> {
    cli.config.clone().or_else(|| {
        ProjectDirs::from("com", "tabula", "tabula")
            .map(|dirs| dirs.config_dir().join(CONFIG_FILENAME))
    })
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let mut config = match config_path(cli) {
        Some(path) => TableConfig::load(&path)?,
        None => TableConfig::default(),
    };
    if let Some(page_size) = cli.page_size {
        config.set_page_size(page_size)?;
    }
    if cli.no_seed {
        config.seed_sample = false;
    }
    tracing::debug!(?config, "configuration resolved");

    let mut api = TableApi::new(InMemoryStore::new());
    if config.seed_sample {
        api.seed(&sample_fields())?;
    }

    let viewport: Box<dyn Viewport> = if std::io::stdout().is_terminal() {
        Box::new(TerminalViewport::new())
    } else {
        Box::new(FixedViewport(u16::MAX))
    };

    Ok(AppContext {
        api,
        query: Query::new(config.page_size),
        viewport,
        compact_below: config.compact_below,
    })
}

fn dispatch(ctx: &mut AppContext, command: ShellCommand, line: &str) -> Result<Flow> {
    match command {
        ShellCommand::List => render_page(ctx)?,
        ShellCommand::Search { .. } => handle_search(ctx, rest_of_line(line, 1))?,
        ShellCommand::Sort { field, desc } => handle_sort(ctx, &field, desc)?,
        ShellCommand::Unsort => {
            ctx.query.sort = None;
            render_page(ctx)?;
        }
        ShellCommand::Page { number } => handle_page(ctx, number.saturating_sub(1))?,
        ShellCommand::Next => {
            let next = ctx.query.page_index + 1;
            handle_page(ctx, next)?
        }
        ShellCommand::Prev => {
            let prev = ctx.query.page_index.saturating_sub(1);
            handle_page(ctx, prev)?
        }
        ShellCommand::Add => {
            ctx.api.open(None)?;
            print_form(ctx.api.session());
        }
        ShellCommand::Edit { id } => {
            ctx.api.open(Some(parse_id(&id)?))?;
            print_form(ctx.api.session());
        }
        ShellCommand::Set { field, .. } => {
            ctx.api.edit(parse_field(&field)?, rest_of_line(line, 2))?;
            print_form(ctx.api.session());
        }
        ShellCommand::Save => handle_save(ctx)?,
        ShellCommand::Cancel => {
            ctx.api.cancel();
            render_page(ctx)?;
        }
        ShellCommand::Delete { id } => handle_delete(ctx, parse_id(&id)?)?,
        ShellCommand::Help => {
            let help = ShellLine::command().render_help();
            println!("{}", help);
        }
        ShellCommand::Quit => return Ok(Flow::Quit),
    }
    Ok(Flow::Continue)
}

fn handle_search(ctx: &mut AppContext, text: &str) -> Result<()> {
    ctx.query.text = text.to_string();
    ctx.query.page_index = 0;
    render_page(ctx)
}

fn handle_sort(ctx: &mut AppContext, field: &str, desc: bool) -> Result<()> {
    let field = parse_field(field)?;
    ctx.query.sort = Some(if desc {
        SortKey::descending(field)
    } else {
        SortKey::select(ctx.query.sort, field)
    });
    ctx.query.page_index = 0;
    render_page(ctx)
}

fn handle_page(ctx: &mut AppContext, page_index: usize) -> Result<()> {
    let page = ctx.api.query(&ctx.query.clone().with_page(page_index))?;
    if page_index >= page.page_count {
        print_error(&format!("No page {}", page_index + 1));
        return Ok(());
    }
    ctx.query.page_index = page_index;
    render_page(ctx)
}

fn handle_save(ctx: &mut AppContext) -> Result<()> {
    match ctx.api.commit() {
        Ok(result) => {
            print_messages(&result.messages);
            render_page(ctx)
        }
        Err(TableError::Validation(_)) => {
            print_form(ctx.api.session());
            Ok(())
        }
        Err(e) => Err(e),
    }
}

fn handle_delete(ctx: &mut AppContext, id: RecordId) -> Result<()> {
    let result = ctx.api.delete(id)?;
    print_messages(&result.messages);

    // Step back if the last row of the last page was removed.
    let page = ctx.api.query(&ctx.query)?;
    if ctx.query.page_index >= page.page_count {
        ctx.query.page_index = page.page_count.saturating_sub(1);
    }
    render_page(ctx)
}

fn render_page(ctx: &AppContext) -> Result<()> {
    let page = ctx.api.query(&ctx.query)?;
    let layout = Layout::for_viewport(ctx.viewport.as_ref(), ctx.compact_below);
    print_page(&page, &ctx.query, layout);
    Ok(())
}

fn prompt(ctx: &AppContext) -> Result<()> {
    let marker = if ctx.api.mode().is_open() { "form" } else { "tabula" };
    print!("{}> ", marker);
    std::io::stdout().flush()?;
    Ok(())
}

fn report(ctx: &AppContext, error: TableError) {
    match error {
        TableError::NotFound(id) => print_error(&format!("No record with id {}", id)),
        TableError::InvalidTransition(_) if ctx.api.mode().is_open() => {
            print_error("Finish the open form first (`save` or `cancel`)")
        }
        TableError::InvalidTransition(_) => print_error("No form is open (`add` or `edit <id>`)"),
        other => print_error(&other.to_string()),
    }
}

/// What follows the first `words` words of `line`, with inner spacing kept as typed.
fn rest_of_line(line: &str, words: usize) -> &str {
    let mut rest = line.trim_start();
    for _ in 0..words {
        rest = rest
            .find(char::is_whitespace)
            .map_or("", |end| rest[end..].trim_start());
    }
    rest
}

fn parse_id(raw: &str) -> Result<RecordId> {
    raw.parse().map_err(TableError::Input)
}

fn parse_field(raw: &str) -> Result<Field> {
    raw.parse().map_err(TableError::Input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rest_of_line_keeps_inner_spacing() {
        assert_eq!(rest_of_line("search Иван  Ив", 1), "Иван  Ив");
        assert_eq!(rest_of_line("  s   a  b ", 1), "a  b ");
        assert_eq!(rest_of_line("set name Анна   Каренина", 2), "Анна   Каренина");
        assert_eq!(rest_of_line("search", 1), "");
        assert_eq!(rest_of_line("set name", 2), "");
    }
}
