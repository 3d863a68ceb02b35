use std::{io, path::PathBuf, process::ExitCode, time::Duration};

use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use reel_portfolio_lib::app::App;
use reel_portfolio_lib::config::AppConfig;
use reel_portfolio_lib::handlers::input::{handle_key_event, InputResult};
use reel_portfolio_lib::{browser, resolve_embed, ui, PortfolioError};

#[derive(clap::Parser, Debug)]
#[command(version, about = "Video editing portfolio in the terminal", long_about = None)]
struct Args {
    /// JSON content file to use instead of the built-in galleries
    #[arg(short, long, global = true)]
    content: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(clap::Subcommand, Debug)]
enum Command {
    /// List gallery ids, names and video counts
    Categories,
    /// Print one gallery and its videos
    Show { id: String },
    /// Print the embeddable player URL for a video link
    Embed { link: String },
    /// Open the nth (1-based) video of a gallery in the browser
    Open { id: String, number: usize },
}

fn main() -> ExitCode {
    use clap::Parser;
    let args = Args::parse();
    reel_portfolio_lib::init_logging(log::LevelFilter::Warn);

    match run(args) {
        Ok(code) => code,
        Err(err) => {
            match err.downcast_ref::<PortfolioError>() {
                Some(e) => eprintln!("{}", e.diagnostics()),
                None => eprintln!("Error: {:?}", err),
            }
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<ExitCode, anyhow::Error> {
    // Link resolution needs neither settings nor content
    if let Some(Command::Embed { link }) = &args.command {
        match resolve_embed(link) {
            Some(target) => println!("{}", target),
            None => println!("not embeddable"),
        }
        return Ok(ExitCode::SUCCESS);
    }

    // --content applies to this run only and never reaches the saved config
    let config = AppConfig::load()?;
    let registry = config.registry_with(args.content.as_deref())?;

    // -- CLI MODE --
    match args.command {
        Some(Command::Categories) => {
            for category in registry.iter() {
                println!(
                    "{:<22} {:<26} {} video(s)",
                    category.id,
                    category.name,
                    category.video_count()
                );
            }
            Ok(ExitCode::SUCCESS)
        }
        Some(Command::Show { id }) => match registry.lookup(&id) {
            Some(category) => {
                println!("{}\n{}\n", category.name, category.description);
                for (number, video) in category.numbered_videos() {
                    let player = resolve_embed(&video.link)
                        .map(|t| t.url)
                        .unwrap_or_else(|| "external".to_string());
                    println!("{:>2}. {}\n    {}\n    player: {}", number, video.title, video.link, player);
                }
                println!("\nMore: {}", category.external_link);
                Ok(ExitCode::SUCCESS)
            }
            None => {
                eprintln!("Category not found: {}", id);
                Ok(ExitCode::FAILURE)
            }
        },
        // Answered before the config was loaded
        Some(Command::Embed { .. }) => Ok(ExitCode::SUCCESS),
        Some(Command::Open { id, number }) => {
            let category = registry.require(&id)?;
            let video = number
                .checked_sub(1)
                .and_then(|i| category.videos.get(i))
                .ok_or_else(|| {
                    PortfolioError::InvalidContent(format!(
                        "'{}' has {} video(s), no #{}",
                        id,
                        category.video_count(),
                        number
                    ))
                })?;
            browser::open_external(&video.link)?;
            println!("Opened {}", video.title);
            Ok(ExitCode::SUCCESS)
        }
        // -- TUI MODE (Default) --
        None => {
            let mut app = App::new(config, registry);
            run_tui(&mut app)?;
            if let Err(e) = app.config.save() {
                log::warn!("could not save config: {}", e);
            }
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn run_tui(app: &mut App) -> Result<(), anyhow::Error> {
    // Setup Terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    // Restore Terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<(), anyhow::Error> {
    loop {
        terminal.draw(|f| ui::ui(f, app))?;

        if event::poll(Duration::from_millis(250))? {
            if let Event::Key(key) = event::read()? {
                if handle_key_event(app, key) == InputResult::Quit {
                    return Ok(());
                }
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn embed_args(link: &str, content: Option<&str>) -> Args {
        Args {
            content: content.map(PathBuf::from),
            command: Some(Command::Embed {
                link: link.to_string(),
            }),
        }
    }

    #[test]
    fn test_embed_not_embeddable_exits_zero() {
        let code = run(embed_args("https://www.instagram.com/reel/x/", None)).unwrap();
        assert_eq!(code, ExitCode::SUCCESS);
    }

    #[test]
    fn test_embed_ignores_missing_content_file() {
        let code = run(embed_args(
            "https://youtu.be/ABC",
            Some("/nonexistent/reel-portfolio/content.json"),
        ))
        .unwrap();
        assert_eq!(code, ExitCode::SUCCESS);
    }
}
