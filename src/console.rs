//! Interactive menu sessions. Both sessions read whitespace-separated tokens
//! from any [`BufRead`] and write prompts and reports to any [`Write`], so
//! they can be scripted as easily as typed.

use std::collections::VecDeque;
use std::fs;
use std::io::{BufRead, Write};
use std::path::Path;
use std::str::FromStr;

use log::{info, warn};

use crate::command::{dispatch_graph, dispatch_tree, GraphCommand, TreeCommand};
use crate::error::Error;
use crate::graph::{Graph, Orientation};
use crate::unbalanced::Tree;

/// Typing this key ends keyboard entry of tree keys.
pub const SENTINEL: i64 = -1;

/// Reads every whitespace-separated integer from `path`, in file order.
/// Reading stops at the first token that is not an integer.
pub fn load_keys(path: &Path) -> Result<Vec<i64>, Error> {
    let contents = fs::read_to_string(path)?;
    let mut keys = Vec::new();
    for token in contents.split_whitespace() {
        match token.parse() {
            Ok(key) => keys.push(key),
            Err(_) => {
                warn!("stopped reading {} at {:?}", path.display(), token);
                break;
            }
        }
    }
    info!("read {} keys from {}", keys.len(), path.display());
    Ok(keys)
}

/// A prompt/answer loop over an input and an output stream.
pub struct Console<R, W> {
    input: R,
    output: W,
    pending: VecDeque<String>,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Wraps the given streams.
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            pending: VecDeque::new(),
        }
    }

    /// Gives back the output stream, e.g. to inspect a transcript.
    pub fn into_output(self) -> W {
        self.output
    }

    /// The BST session: build a tree from a file or the keyboard, print both
    /// traversals, search for one key, delete one key and print the result.
    ///
    /// An unknown construction mode ends the session with
    /// [`Error::InvalidChoice`]. A key file that cannot be read is reported and
    /// the session continues with an empty tree.
    pub fn run_tree_session(&mut self, keys_file: &Path) -> Result<Tree<i64>, Error> {
        let mut tree = Tree::new();

        let choice: i64 = self.read(
            "Enter 1 to build the tree from a file, or 2 to type keys: ",
        )?;
        match choice {
            1 => match load_keys(keys_file) {
                Ok(keys) => {
                    for key in keys {
                        dispatch_tree(&mut tree, TreeCommand::Insert(key));
                    }
                }
                Err(err) => {
                    warn!("{}", err);
                    writeln!(
                        self.output,
                        "Could not open file {}: {}",
                        keys_file.display(),
                        err
                    )?;
                }
            },
            2 => loop {
                let key = self.read(&format!("Enter a key ({} to finish): ", SENTINEL))?;
                if key == SENTINEL {
                    break;
                }
                dispatch_tree(&mut tree, TreeCommand::Insert(key));
            },
            _ => {
                writeln!(self.output, "Invalid choice. Only 1 or 2 are allowed.")?;
                return Err(Error::InvalidChoice { choice });
            }
        }

        self.print_traversals(&mut tree)?;

        let key = self.read("Enter a key to search for: ")?;
        let report = dispatch_tree(&mut tree, TreeCommand::Search(key));
        writeln!(self.output, "{}", report)?;

        let key = self.read("Enter a key to delete: ")?;
        let report = dispatch_tree(&mut tree, TreeCommand::Remove(key));
        writeln!(self.output, "{}", report)?;

        writeln!(self.output, "Tree after deletion:")?;
        self.print_traversals(&mut tree)?;
        Ok(tree)
    }

    /// The graph session: pick an orientation and a vertex count, then add
    /// edges and look for Eulerian walks until the user exits.
    pub fn run_graph_session(&mut self) -> Result<Graph, Error> {
        let orientation = loop {
            writeln!(self.output, "1. Directed")?;
            writeln!(self.output, "2. Undirected")?;
            match self.read::<i64>("Choice: ")? {
                1 => break Orientation::Directed,
                2 => break Orientation::Undirected,
                _ => writeln!(self.output, "Invalid choice.")?,
            }
        };
        let name = match orientation {
            Orientation::Directed => "directed",
            Orientation::Undirected => "undirected",
        };
        writeln!(self.output, "Selected: {}", name)?;

        let mut graph = loop {
            let vertex_count = self.read("Enter the number of vertices: ")?;
            match Graph::new(vertex_count, orientation) {
                Ok(graph) => break graph,
                Err(err) => writeln!(self.output, "{}", err)?,
            }
        };

        loop {
            writeln!(self.output, "1. Add edge")?;
            writeln!(self.output, "2. Find Eulerian walk")?;
            writeln!(self.output, "3. Exit")?;
            let command = match self.read::<i64>("Choice: ")? {
                1 => {
                    let from = self.read("Enter the edge's vertices (u v): ")?;
                    let to = self.read("")?;
                    GraphCommand::AddEdge { from, to }
                }
                2 => GraphCommand::FindEulerPath,
                3 => {
                    writeln!(self.output, "Exiting.")?;
                    break;
                }
                _ => {
                    writeln!(self.output, "Invalid choice.")?;
                    continue;
                }
            };
            match dispatch_graph(&mut graph, command) {
                Ok(report) => writeln!(self.output, "{}", report)?,
                Err(err) => writeln!(self.output, "{}", err)?,
            }
        }
        Ok(graph)
    }

    fn print_traversals(&mut self, tree: &mut Tree<i64>) -> Result<(), Error> {
        for command in [TreeCommand::Preorder, TreeCommand::Postorder] {
            let report = dispatch_tree(tree, command);
            writeln!(self.output, "{}", report)?;
        }
        Ok(())
    }

    /// Prompts until a token parses as `T`. Malformed tokens are discarded.
    fn read<T: FromStr>(&mut self, prompt: &str) -> Result<T, Error> {
        loop {
            if self.pending.is_empty() {
                write!(self.output, "{}", prompt)?;
                self.output.flush()?;
            }
            let token = self.next_token()?.ok_or_else(|| Error::UnexpectedEof {
                prompt: prompt.trim().to_string(),
            })?;
            match token.parse() {
                Ok(value) => return Ok(value),
                Err(_) => {
                    warn!("discarding malformed input {:?}", token);
                    writeln!(self.output, "Invalid number {:?}, try again.", token)?;
                }
            }
        }
    }

    fn next_token(&mut self) -> Result<Option<String>, Error> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(Some(token));
            }
            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            self.pending
                .extend(line.split_whitespace().map(str::to_owned));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn malformed_tokens_are_discarded() {
        let mut console = Console::new("x 1.5 42\n".as_bytes(), Vec::new());

        let value: i64 = console.read("> ").unwrap();
        assert_eq!(value, 42);

        let output = String::from_utf8(console.into_output()).unwrap();
        assert!(output.contains("Invalid number \"x\", try again."));
        assert!(output.contains("Invalid number \"1.5\", try again."));
    }

    #[test]
    fn eof_is_reported_with_the_prompt() {
        let mut console = Console::new("".as_bytes(), Vec::new());

        match console.read::<i64>("Choice: ") {
            Err(Error::UnexpectedEof { prompt }) => assert_eq!(prompt, "Choice:"),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn tokens_span_lines() {
        let mut console = Console::new("1\n\n  2 3\n".as_bytes(), Vec::new());

        let values: Vec<usize> = (0..3).map(|_| console.read("").unwrap()).collect();
        assert_eq!(values, vec![1, 2, 3]);
    }

    #[test]
    fn missing_key_file_is_an_io_error() {
        let result = load_keys(Path::new("this/file/does/not/exist.txt"));
        assert!(matches!(result, Err(Error::Io(_))));
    }
}
