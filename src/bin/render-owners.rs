use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};
use render_owners::{
    LoadedTree, OutputId, RenderArena, RenderKind, RenderTree, ResolveOpts, Resolver, TreeSnapshot,
};

#[derive(Parser, Debug)]
#[command(name = "render-owners", version)]
struct Cli {
    /// Log resolver steps to stderr (repeat for trace level).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the components owning an element, innermost first.
    Owners(OwnersArgs),
    /// Print the root output element(s) of the element's owning component.
    Root(RootArgs),
    /// Print the loaded render tree, one node per line.
    Dump(DumpArgs),
}

#[derive(Args, Debug)]
struct Target {
    /// Input render tree JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Select the first element whose direct text equals this string.
    #[arg(long, conflicts_with = "output", required_unless_present = "output")]
    text: Option<String>,

    /// Select an element by output id.
    #[arg(long)]
    output: Option<u32>,

    /// Maximum walk depth.
    #[arg(long, default_value_t = ResolveOpts::default().max_depth)]
    max_depth: usize,
}

#[derive(Parser, Debug)]
struct OwnersArgs {
    #[command(flatten)]
    target: Target,

    /// Print only the outermost owner sharing the element's root output.
    #[arg(long, default_value_t = false)]
    outer: bool,
}

#[derive(Parser, Debug)]
struct RootArgs {
    #[command(flatten)]
    target: Target,

    /// Print every top-level output instead of the first.
    #[arg(long, default_value_t = false)]
    all: bool,
}

#[derive(Parser, Debug)]
struct DumpArgs {
    /// Input render tree JSON.
    #[arg(long = "in")]
    in_path: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    match cli.cmd {
        Command::Owners(args) => cmd_owners(args),
        Command::Root(args) => cmd_root(args),
        Command::Dump(args) => cmd_dump(args),
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => return,
        1 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn load(path: &Path) -> anyhow::Result<LoadedTree> {
    let snap = TreeSnapshot::from_path(path)?;
    let loaded = snap
        .load()
        .with_context(|| format!("load render tree '{}'", path.display()))?;
    Ok(loaded)
}

fn select(arena: &RenderArena, target: &Target) -> anyhow::Result<OutputId> {
    if let Some(t) = &target.text {
        return arena
            .find_by_text(t)
            .with_context(|| format!("no element with text '{t}'"));
    }
    let id = OutputId(target.output.context("either --text or --output is required")?);
    anyhow::ensure!(arena.element(id).is_some(), "no output {id}");
    Ok(id)
}

fn describe(arena: &RenderArena, out: OutputId) -> String {
    match arena.element(out) {
        Some(el) => format!("{el}{out}"),
        None => out.to_string(),
    }
}

fn cmd_owners(args: OwnersArgs) -> anyhow::Result<()> {
    let loaded = load(&args.target.in_path)?;
    let out = select(&loaded.arena, &args.target)?;
    let opts = ResolveOpts {
        max_depth: args.target.max_depth,
    };
    let resolver = Resolver::with_opts(&loaded.arena, opts);

    if args.outer {
        println!("{}", resolver.resolve_outer_owner(&out)?);
        return Ok(());
    }
    for id in resolver.resolve_owner_chain(&out)? {
        println!("{id}");
    }
    Ok(())
}

fn cmd_root(args: RootArgs) -> anyhow::Result<()> {
    let loaded = load(&args.target.in_path)?;
    let out = select(&loaded.arena, &args.target)?;
    let opts = ResolveOpts {
        max_depth: args.target.max_depth,
    };
    let resolver = Resolver::with_opts(&loaded.arena, opts);

    let roots = if args.all {
        resolver.resolve_all_root_outputs(&out)?
    } else {
        vec![resolver.resolve_root_output(&out)?]
    };
    for root in roots {
        println!("{}", describe(&loaded.arena, root));
    }
    Ok(())
}

fn cmd_dump(args: DumpArgs) -> anyhow::Result<()> {
    let loaded = load(&args.in_path)?;
    let arena = &loaded.arena;
    for key in arena.preorder() {
        let indent = "  ".repeat(arena.depth_of(key));
        let line = match arena.classify(key)? {
            RenderKind::Component(id) => format!("<{id}/>"),
            RenderKind::Element => match arena.output_of(key) {
                Some(out) => describe(arena, out),
                None => "<?>".to_string(),
            },
            RenderKind::Text => format!("{:?}", arena.text_of(key).unwrap_or_default()),
            kind => kind.label().to_string(),
        };
        println!("{indent}{line}");
    }
    Ok(())
}
