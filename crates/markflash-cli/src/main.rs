use anyhow::{Context, Result, bail};
use markflash_config::{Config, StartupMode};
use markflash_engine::{ViewMode, Workspace, io, parse_blocks, preview, serialize_blocks};
use relative_path::RelativePathBuf;
use std::{
    env, fs,
    path::{Path, PathBuf},
    process,
};

const USAGE: &str = "Usage: markflash <command> [args]

Commands:
  blocks <file>                Print the blocks parsed from a markdown file
  normalize <file> [--write]   Print the file as the block editor would write it back,
                               or rewrite it in place with --write
  preview <file>               Print the rendered HTML preview
  list                         List documents imported from the configured notes path";

fn read_input(args: &[String]) -> Result<String> {
    let Some(path) = args.first() else {
        bail!("missing <file> argument\n\n{USAGE}");
    };
    let path = PathBuf::from(path);
    fs::read_to_string(&path).with_context(|| format!("Failed to read {}", path.display()))
}

/// One line per block; newlines in content are escaped so each block stays on its line
fn print_blocks(markdown: &str) {
    for block in parse_blocks(markdown) {
        println!("{}\t{}", block.kind, block.content.replace('\n', "\\n"));
    }
}

fn normalize(args: &[String]) -> Result<()> {
    let markdown = serialize_blocks(&parse_blocks(&read_input(args)?));
    if !args.iter().skip(1).any(|arg| arg == "--write") {
        println!("{markdown}");
        return Ok(());
    }

    let path = Path::new(&args[0]);
    let notes_root = path
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
        .unwrap_or(Path::new("."));
    let Some(file_name) = path.file_name().and_then(|name| name.to_str()) else {
        bail!("cannot write to {}", path.display());
    };
    io::write_file(&RelativePathBuf::from(file_name), notes_root, &markdown)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    log::info!("Normalized {}", path.display());
    Ok(())
}

fn open_workspace(config: Option<&Config>) -> Result<Workspace> {
    let mut workspace = Workspace::empty();
    if let Some(config) = config {
        if let Some(notes_path) = &config.notes_path {
            workspace
                .import_notes(notes_path)
                .with_context(|| format!("Failed to import notes from {}", notes_path.display()))?;
        }
        workspace.set_view_mode(match config.default_mode {
            StartupMode::Raw => ViewMode::Raw,
            StartupMode::Block => ViewMode::Block,
        });
    }
    Ok(workspace)
}

fn list_documents(workspace: &Workspace) {
    if workspace.store().is_empty() {
        println!("No documents. Set notes_path in {}", Config::config_path().display());
        return;
    }
    for doc in workspace.store().list() {
        let source = doc
            .source
            .as_ref()
            .map(|p| p.as_str().to_string())
            .unwrap_or_default();
        println!("{}\t{}\t{}", doc.id, doc.title, source);
    }
}

fn run(args: &[String]) -> Result<()> {
    let Some((command, rest)) = args.split_first() else {
        bail!("{USAGE}");
    };

    match command.as_str() {
        "blocks" => print_blocks(&read_input(rest)?),
        "normalize" => normalize(rest)?,
        "preview" => print!(
            "{}",
            preview::render_html(&read_input(rest)?, &preview::PlainHighlighter)
        ),
        "list" => {
            let config = Config::load()?;
            log::info!("Config loaded: {}", config.is_some());
            let workspace = open_workspace(config.as_ref())?;
            list_documents(&workspace);
        }
        "-h" | "--help" | "help" => println!("{USAGE}"),
        other => bail!("unknown command '{other}'\n\n{USAGE}"),
    }
    Ok(())
}

fn main() {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let args: Vec<String> = env::args().skip(1).collect();
    if let Err(e) = run(&args) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
