use std::{
    collections::VecDeque,
    io::{BufRead, Write},
};

/// The input/output port used by `citeste` and `scrie`.
///
/// `citeste` pulls whitespace-delimited tokens one at a time; `scrie` writes
/// already-rendered text (including its line terminator). The evaluator is
/// written against this trait so programs can run against the real terminal
/// or against scripted buffers in tests.
pub trait Io {
    /// Reads the next whitespace-delimited input token.
    ///
    /// Returns `None` once the input is exhausted.
    fn read_token(&mut self) -> Option<String>;

    /// Writes `text` to the output, verbatim.
    fn write(&mut self, text: &str);
}

/// I/O port backed by the process's standard streams.
///
/// Input lines are read lazily and split on whitespace; output is flushed
/// after every write so prompts interleave correctly with typed input.
#[derive(Default)]
pub struct StdIo {
    pending: VecDeque<String>,
}

impl StdIo {
    /// Creates a stdio-backed port.
    #[must_use]
    pub fn new() -> Self {
        Self { pending: VecDeque::new(), }
    }
}

impl Io for StdIo {
    fn read_token(&mut self) -> Option<String> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Some(token);
            }

            let mut line = String::new();
            match std::io::stdin().lock().read_line(&mut line) {
                Ok(0) | Err(_) => return None,
                Ok(_) => {
                    self.pending
                        .extend(line.split_whitespace().map(str::to_owned));
                },
            }
        }
    }

    fn write(&mut self, text: &str) {
        print!("{text}");
        let _ = std::io::stdout().flush();
    }
}

/// I/O port backed by in-memory buffers.
///
/// Input is scripted up front; output accumulates in a string the caller can
/// inspect afterwards. Used by the test suite.
#[derive(Debug, Default)]
pub struct BufferedIo {
    input:  VecDeque<String>,
    output: String,
}

impl BufferedIo {
    /// Creates a buffered port whose input consists of the whitespace
    /// delimited tokens of `input`.
    #[must_use]
    pub fn new(input: &str) -> Self {
        Self { input:  input.split_whitespace().map(str::to_owned).collect(),
               output: String::new(), }
    }

    /// Everything the program has written so far.
    #[must_use]
    pub fn output(&self) -> &str {
        &self.output
    }
}

impl Io for BufferedIo {
    fn read_token(&mut self) -> Option<String> {
        self.input.pop_front()
    }

    fn write(&mut self, text: &str) {
        self.output.push_str(text);
    }
}
