use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "jssor-widget", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the script payload of one slider.
    Script(ScriptArgs),
    /// Render one or more sliders into an HTML fragment.
    Page(PageArgs),
}

#[derive(Parser, Debug)]
struct ScriptArgs {
    /// Input slider settings JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Override the literal strategy from the settings file.
    #[arg(long, value_enum)]
    strategy: Option<StrategyChoice>,
}

#[derive(Parser, Debug)]
struct PageArgs {
    /// Input slider settings JSON (repeat for several sliders on one page).
    #[arg(long = "in", required = true)]
    in_paths: Vec<PathBuf>,

    /// Output HTML path; stdout when omitted.
    #[arg(long)]
    out: Option<PathBuf>,

    /// Override the literal strategy from the settings files.
    #[arg(long, value_enum)]
    strategy: Option<StrategyChoice>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum StrategyChoice {
    Text,
    Native,
}

impl From<StrategyChoice> for jssor_widget::LiteralStrategy {
    fn from(choice: StrategyChoice) -> Self {
        match choice {
            StrategyChoice::Text => Self::TextRewrite,
            StrategyChoice::Native => Self::Native,
        }
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Script(args) => cmd_script(args),
        Command::Page(args) => cmd_page(args),
    }
}

fn load_widget(
    path: &Path,
    strategy: Option<StrategyChoice>,
) -> anyhow::Result<jssor_widget::SliderWidget> {
    let widget = jssor_widget::SliderWidget::from_path(path)
        .with_context(|| format!("load slider settings '{}'", path.display()))?;
    let Some(choice) = strategy else {
        return Ok(widget);
    };
    let mut settings = widget.settings().clone();
    settings.strategy = choice.into();
    Ok(jssor_widget::SliderWidget::new(settings)?)
}

fn cmd_script(args: ScriptArgs) -> anyhow::Result<()> {
    let widget = load_widget(&args.in_path, args.strategy)?;
    let rendered = widget
        .prepare()
        .with_context(|| format!("render slider '{}'", widget.id()))?;
    print!("{}", rendered.script.to_js());
    Ok(())
}

fn cmd_page(args: PageArgs) -> anyhow::Result<()> {
    let widgets = args
        .in_paths
        .iter()
        .map(|p| load_widget(p, args.strategy))
        .collect::<anyhow::Result<Vec<_>>>()?;
    jssor_widget::ensure_unique_ids(&widgets)?;

    let mut view = jssor_widget::InMemoryView::new();
    for (widget, rendered) in widgets.iter().zip(jssor_widget::prerender(&widgets)) {
        let rendered = rendered.with_context(|| format!("render slider '{}'", widget.id()))?;
        rendered.emit(&mut view)?;
    }
    let html = view.to_html();

    match &args.out {
        Some(out) => {
            if let Some(parent) = out.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("create output dir '{}'", parent.display()))?;
            }
            std::fs::write(out, html).with_context(|| format!("write html '{}'", out.display()))?;
            eprintln!("wrote {}", out.display());
        }
        None => print!("{html}"),
    }
    Ok(())
}
