use std::io::{self, BufRead};

/// Reads the player's answers one line at a time.
pub struct LineReader<R> {
    reader: R,
    buffer: String,
}

impl<R: BufRead> LineReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buffer: String::new(),
        }
    }

    /// Next line without its terminator, or `None` at end of input.
    pub fn next_line(&mut self) -> io::Result<Option<String>> {
        self.buffer.clear();
        if self.reader.read_line(&mut self.buffer)? == 0 {
            return Ok(None);
        }
        Ok(Some(self.buffer.trim_end_matches(['\r', '\n']).to_string()))
    }
}
