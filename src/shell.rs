// Read-eval-print loop around the converter

use crate::config::ShellConfig;
use crate::convert::process_line;
use std::io::{self, BufRead, Write};
use tracing::{debug, info};

pub struct Shell<R, W> {
    config: ShellConfig,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(config: ShellConfig, input: R, output: W) -> Self {
        Self {
            config,
            input,
            output,
        }
    }

    /// Prompt, read and answer lines until the exit command or end of input.
    /// Returns the number of lines answered.
    pub fn run(&mut self) -> io::Result<usize> {
        let exit_command = self.config.exit_command.to_lowercase();
        let mut answered = 0;

        loop {
            writeln!(self.output, "{}", self.config.prompt)?;
            self.output.flush()?;

            let mut raw = String::new();
            if self.input.read_line(&mut raw)? == 0 {
                debug!("end of input");
                break;
            }

            let line = raw.trim_end_matches(['\r', '\n']).to_lowercase();
            if line == exit_command {
                break;
            }

            let reply = process_line(&line);
            writeln!(self.output, "{}", reply)?;
            if self.config.blank_line_after_reply {
                writeln!(self.output)?;
            }
            answered += 1;
        }

        info!(answered, "shell finished");
        Ok(answered)
    }

    pub fn into_output(self) -> W {
        self.output
    }
}
