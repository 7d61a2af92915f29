//! Line-oriented command interface over a single owned graph.
//!
//! This is the menu-driven front end: it parses one command per line, applies
//! it to its graph and writes any user-facing messages to the given writer.

use std::io::{self, BufRead, Write};
use std::str::FromStr;

use crate::graph::{DirectedGraph, Graph, MutableGraph};
use crate::{AllPairs, Dijkstra, Error};

pub const MENU: &str = "Menu\n\
add vertex <key>\n\
add edge <src> <dest> <weight>\n\
johnson\n\
display\n\
help\n\
quit";

/// A parse failure for one input line
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("Empty command.")]
    Empty,

    #[error("Unknown command: {0}")]
    Unknown(String),

    #[error("Missing argument: {0}")]
    MissingArgument(&'static str),

    #[error("Invalid {name}: {value}")]
    InvalidNumber { name: &'static str, value: String },

    #[error("Unexpected argument: {0}")]
    TrailingArgument(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    AddVertex(i64),
    AddEdge { src: i64, dest: i64, weight: i64 },
    AllPairs,
    Display,
    Help,
    Quit,
}

fn parse_arg<'a>(
    words: &mut impl Iterator<Item = &'a str>,
    name: &'static str,
) -> Result<i64, CommandError> {
    let value = words.next().ok_or(CommandError::MissingArgument(name))?;
    value.parse().map_err(|_| CommandError::InvalidNumber {
        name,
        value: value.to_string(),
    })
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let operation = words.next().ok_or(CommandError::Empty)?;

        let command = match operation {
            "add" => match words.next() {
                Some("vertex") => Command::AddVertex(parse_arg(&mut words, "key")?),
                Some("edge") => Command::AddEdge {
                    src: parse_arg(&mut words, "src")?,
                    dest: parse_arg(&mut words, "dest")?,
                    weight: parse_arg(&mut words, "weight")?,
                },
                Some(other) => return Err(CommandError::Unknown(format!("add {}", other))),
                None => return Err(CommandError::MissingArgument("vertex|edge")),
            },
            "johnson" | "all-pairs" => Command::AllPairs,
            "display" => Command::Display,
            "help" => Command::Help,
            "quit" => Command::Quit,
            other => return Err(CommandError::Unknown(other.to_string())),
        };

        match words.next() {
            Some(extra) => Err(CommandError::TrailingArgument(extra.to_string())),
            None => Ok(command),
        }
    }
}

/// Whether the loop should keep reading after a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// The interactive session state: one graph and the engine used on it
#[derive(Debug, Default)]
pub struct Shell {
    graph: DirectedGraph<i64, i64>,
    all_pairs: AllPairs<Dijkstra>,
}

impl Shell {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_all_pairs(mut self, all_pairs: AllPairs<Dijkstra>) -> Self {
        self.all_pairs = all_pairs;
        self
    }

    pub fn graph(&self) -> &DirectedGraph<i64, i64> {
        &self.graph
    }

    /// Applies one command, writing messages and results to `out`
    pub fn execute<O: Write>(&mut self, command: Command, out: &mut O) -> io::Result<Flow> {
        match command {
            Command::AddVertex(key) => {
                if let Err(Error::VertexAlreadyExists(_)) = self.graph.add_vertex(key) {
                    writeln!(out, "Vertex already exists.")?;
                }
            }
            Command::AddEdge { src, dest, weight } => match self.graph.add_edge(src, dest, weight) {
                Ok(()) => {}
                Err(Error::VertexMissing(key)) => writeln!(out, "Vertex {} does not exist.", key)?,
                Err(Error::EdgeAlreadyExists(..)) => writeln!(out, "Edge already exists.")?,
                Err(err) => writeln!(out, "{}.", err)?,
            },
            Command::AllPairs => match self.all_pairs.compute(&self.graph) {
                Ok(table) => {
                    writeln!(out, "Shortest distances:")?;
                    for (source, target, distance) in table.entries() {
                        writeln!(out, "{} to {} distance {}", source, target, distance)?;
                    }
                }
                Err(err) => writeln!(out, "{}.", err)?,
            },
            Command::Display => self.display(out)?,
            Command::Help => writeln!(out, "{}", MENU)?,
            Command::Quit => return Ok(Flow::Quit),
        }
        Ok(Flow::Continue)
    }

    fn display<O: Write>(&self, out: &mut O) -> io::Result<()> {
        let snapshot = self.graph.snapshot();
        let keys: Vec<String> = snapshot.vertices.iter().map(|k| k.to_string()).collect();

        writeln!(
            out,
            "{} vertices, {} edges",
            self.graph.vertex_count(),
            self.graph.edge_count()
        )?;
        writeln!(out, "Vertices: {}", keys.join(", "))?;
        for (src, dest, weight) in &snapshot.edges {
            writeln!(out, "{} -> {} (weight {})", src, dest, weight)?;
        }
        Ok(())
    }

    /// Reads commands until `quit` or end of input. Parse errors are reported and skipped.
    pub fn run<I: BufRead, O: Write>(&mut self, input: I, out: &mut O, prompt: bool) -> io::Result<()> {
        writeln!(out, "{}", MENU)?;

        let mut lines = input.lines();
        loop {
            if prompt {
                write!(out, "What would you like to do? ")?;
                out.flush()?;
            }
            let Some(line) = lines.next() else {
                break;
            };
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }

            match line.parse::<Command>() {
                Ok(command) => {
                    log::debug!("executing {:?}", command);
                    if self.execute(command, out)? == Flow::Quit {
                        break;
                    }
                }
                Err(err) => writeln!(out, "{}", err)?,
            }
        }
        Ok(())
    }
}
