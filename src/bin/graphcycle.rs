//! Line-oriented front end for a graph editing session.
//!
//! Usage:
//!   cargo run --features cli -- [--undirected] [--log-level debug]
//!
//! Reads one command per line from stdin (`help` lists them) and prints the
//! outcome of each.

use std::io::{self, BufRead, Write};
use std::process;

use clap::{Parser, Subcommand};
use graphcycle::{GraphKind, Notice, Position, Session, tracing_support};

/// Edit a graph from the command line and look for cycles in it.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Start with an undirected graph
    #[arg(long)]
    undirected: bool,

    /// Log filter, e.g. `debug` or `graphcycle=trace`
    #[arg(long, default_value = "warn")]
    log_level: String,

    /// Print time spent per span on exit
    #[arg(long)]
    timings: bool,
}

#[derive(Parser, Debug)]
#[command(no_binary_name = true, disable_version_flag = true)]
struct Line {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Add a vertex, auto-named when NAME is omitted
    Vertex { name: Option<String> },
    /// Add an edge typed as text; self-loops are rejected
    Edge { source: String, target: String },
    /// Join two existing vertices; self-loops are allowed
    Link { source: String, target: String },
    /// Delete the edge between two vertices
    Unlink { source: String, target: String },
    /// Rename a vertex
    Rename { from: String, to: String },
    /// Delete a vertex and its edges
    Delete { name: String },
    /// Reverse a directed edge
    Flip { source: String, target: String },
    /// Look for a cycle
    Cycle,
    /// Print the adjacency matrix
    Matrix,
    /// List vertices and edges
    Show,
    /// Remove everything
    Clear,
    /// Start a new graph of the given kind
    Kind { kind: GraphKind },
    /// Exit
    Quit,
}

enum Flow {
    Continue,
    Quit,
}

fn main() {
    let args = Args::parse();
    tracing_support::init_tracing(&args.log_level);

    let kind = if args.undirected {
        GraphKind::Undirected
    } else {
        GraphKind::Directed
    };
    let mut session = Session::new(kind);
    tracing::info!(%kind, "session started");

    if let Err(err) = run(&mut session) {
        eprintln!("Failed to read stdin: {err}");
        process::exit(1);
    }
    if args.timings {
        tracing_support::dump_span_timings();
    }
}

fn run(session: &mut Session) -> io::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    for line in stdin.lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        match Line::try_parse_from(line.split_whitespace()) {
            Ok(Line { command }) => {
                if let Flow::Quit = execute(session, command, &mut stdout)? {
                    break;
                }
            }
            Err(err) => writeln!(stdout, "{err}")?,
        }
    }
    Ok(())
}

fn execute(session: &mut Session, command: Command, out: &mut impl Write) -> io::Result<Flow> {
    let notice = match command {
        Command::Vertex { name: None } => session.create_vertex_at(Position::default()),
        Command::Vertex { name: Some(name) } => {
            session.create_named_vertex(&name, Position::default())
        }
        Command::Edge { source, target } => {
            session.create_edge_from_input(&format!("{source} {target}"))
        }
        Command::Link { source, target } => {
            match (vertex(session, &source), vertex(session, &target)) {
                (Ok(source), Ok(target)) => session.connect(source, target),
                (Err(notice), _) | (_, Err(notice)) => notice,
            }
        }
        Command::Unlink { source, target } => {
            session.delete_edge_from_input(&format!("{source} {target}"))
        }
        Command::Rename { from, to } => match vertex(session, &from) {
            Ok(id) => session.rename_vertex(id, &to),
            Err(notice) => notice,
        },
        Command::Delete { name } => match vertex(session, &name) {
            Ok(id) => session.delete_vertex(id),
            Err(notice) => notice,
        },
        Command::Flip { source, target } => {
            match session.graph().edge_between(&source, &target).map(|e| e.id()) {
                Some(id) => session.reverse_edge(id),
                None => Notice::error(format!("edge not found: {source} → {target}")),
            }
        }
        Command::Cycle => session.detect_cycles(),
        Command::Matrix => {
            write!(out, "{}", session.graph().adjacency_matrix())?;
            return Ok(Flow::Continue);
        }
        Command::Show => {
            show(session, out)?;
            return Ok(Flow::Continue);
        }
        Command::Clear => session.clear(),
        Command::Kind { kind } => session.change_kind(kind),
        Command::Quit => return Ok(Flow::Quit),
    };
    writeln!(out, "{notice}")?;
    Ok(Flow::Continue)
}

fn vertex(session: &Session, name: &str) -> Result<graphcycle::VertexId, Notice> {
    session
        .graph()
        .vertex_id(name)
        .ok_or_else(|| Notice::error(format!("no vertex named {name:?}")))
}

fn show(session: &Session, out: &mut impl Write) -> io::Result<()> {
    let graph = session.graph();
    writeln!(
        out,
        "{} graph, {} vertices, {} edges",
        graph.kind(),
        graph.num_vertices(),
        graph.num_edges()
    )?;
    for vertex in graph.vertices() {
        let mark = if session.is_vertex_highlighted(vertex.id()) {
            "*"
        } else {
            " "
        };
        writeln!(
            out,
            "{mark} {} degree {} {}",
            vertex.name(),
            vertex.degree(),
            vertex.shade().hex()
        )?;
    }
    let arrow = if graph.is_directed() { "→" } else { "—" };
    for edge in graph.edges() {
        if let Some((source, target)) = graph.edge_names(edge.id()) {
            let mark = if session.is_edge_highlighted(edge.id()) {
                "*"
            } else {
                " "
            };
            writeln!(out, "{mark} {source} {arrow} {target}")?;
        }
    }
    Ok(())
}
