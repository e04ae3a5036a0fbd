//! Interactive prompt run when no subcommand is given
//!
//! Asks for a graph file, two node ids and the print/debug/visualize
//! switches, then runs both searches once. Typing `exit` at any prompt, in
//! any case, ends the session.

use std::io::{BufRead, Write};
use std::path::PathBuf;

use graphwalk_core::error::{GraphwalkError, Result};
use graphwalk_core::graph::{Algorithm, Graph};
use graphwalk_core::loader::{check_extension, load_graph, CSV_FILE_EXTENSION};

use crate::cli::{DebugMode, OutputFormat};
use crate::commands::dispatch::CommandContext;
use crate::commands::find::{default_visualize_dir, run_query, QueryOptions};

const EXIT_COMMAND: &str = "exit";

const FILE_PROMPT: &str = "Please enter the file name and extension (or type 'exit' to quit): ";
const START_PROMPT: &str = "Start node (or type 'exit' to quit): ";
const END_PROMPT: &str = "End Node (or type 'exit' to quit): ";
const PRINT_PROMPT: &str =
    "Enter p to print the graph, or type 'exit' to quit, or press Enter to continue: ";
const DEBUG_PROMPT: &str = "Enter d to enable debug mode (verbose output), b to debug BFS, \
                            f to debug DFS, or type 'exit' to quit, or press Enter to continue: ";
const VISUALIZE_PROMPT: &str = "Enter v to visualize the graph and the path found, \
                                or type 'exit' to quit, or press Enter to continue: ";

/// Line reader that treats `exit` and end of input as a request to quit
struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    /// Show `prompt` and read one line. `None` means the user quit.
    fn ask(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        let read = self.input.read_line(&mut line)?;
        // Only the line terminator is dropped; node ids are matched exactly
        let answer = line.trim_end_matches(&['\r', '\n'][..]);
        if read == 0 || answer.eq_ignore_ascii_case(EXIT_COMMAND) {
            writeln!(self.output)?;
            writeln!(self.output, "Exiting...")?;
            return Ok(None);
        }
        Ok(Some(answer.to_string()))
    }

    fn say(&mut self, message: &str) -> Result<()> {
        writeln!(self.output, "{}", message)?;
        Ok(())
    }
}

/// Keep asking for a file until one loads
fn ask_graph<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
) -> Result<Option<(PathBuf, Graph)>> {
    loop {
        let Some(name) = prompter.ask(FILE_PROMPT)? else {
            return Ok(None);
        };
        let file = PathBuf::from(name);

        if check_extension(&file).is_err() {
            prompter.say(&format!(
                "Invalid file extension. Please enter a valid {} file.",
                CSV_FILE_EXTENSION
            ))?;
            continue;
        }

        match load_graph(&file) {
            Ok(graph) => return Ok(Some((file, graph))),
            Err(e) => {
                let reason = match e {
                    GraphwalkError::GraphLoad { reason, .. } => reason,
                    other => other.to_string(),
                };
                tracing::debug!(path = %file.display(), %reason, "graph_load_failed");
                prompter.say(&format!(
                    "Error loading graph: {}. Please check the file name and try again.",
                    reason
                ))?;
            }
        }
    }
}

/// Keep asking for a start and end node until both exist in `graph`
fn ask_endpoints<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    graph: &Graph,
) -> Result<Option<(String, String)>> {
    loop {
        let Some(start) = prompter.ask(START_PROMPT)? else {
            return Ok(None);
        };
        let Some(end) = prompter.ask(END_PROMPT)? else {
            return Ok(None);
        };

        if graph.contains(&start) && graph.contains(&end) {
            return Ok(Some((start, end)));
        }
        prompter.say("Invalid input: Node ID out of range. Please try again.")?;
    }
}

/// Run one interactive session
pub fn execute<R: BufRead, W: Write>(ctx: &CommandContext, input: R, output: W) -> Result<()> {
    let mut prompter = Prompter { input, output };

    let Some((file, graph)) = ask_graph(&mut prompter)? else {
        return Ok(());
    };
    let Some((start, end)) = ask_endpoints(&mut prompter, &graph)? else {
        return Ok(());
    };

    let Some(print) = prompter.ask(PRINT_PROMPT)? else {
        return Ok(());
    };
    let Some(debug) = prompter.ask(DEBUG_PROMPT)? else {
        return Ok(());
    };
    let Some(visualize) = prompter.ask(VISUALIZE_PROMPT)? else {
        return Ok(());
    };

    let opts = QueryOptions {
        print: print.eq_ignore_ascii_case("p"),
        debug: DebugMode::from_flag(&debug),
        visualize: visualize
            .eq_ignore_ascii_case("v")
            .then(|| default_visualize_dir(&file)),
        algorithms: &Algorithm::ALL,
        format: OutputFormat::Human,
    };

    prompter.say("Loading file...")?;
    let report = run_query(ctx, &graph, &file, &start, &end, &opts, &mut prompter.output)?;
    if let Some(e) = report.first_error() {
        tracing::warn!(error = %e, "search aborted");
    }
    Ok(())
}
