use crate::msg::print_location;
use color_print::cprintln;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Unknown computation: `{0}`")]
    UnknownComp(String),

    #[error("Unknown destination: `{0}`")]
    UnknownDest(String),

    #[error("Unknown jump: `{0}`")]
    UnknownJump(String),

    #[error("Missing symbol or value after `@`")]
    MissingSymbol,

    #[error("Failed to open file: {0}")]
    FileOpen(String, #[source] std::io::Error),

    #[error("Failed to read line")]
    FileRead(#[source] std::io::Error),

    #[error("Failed to create file: {0}")]
    FileCreate(String, #[source] std::io::Error),

    #[error("Failed to write file: {0}")]
    FileWrite(String, #[source] std::io::Error),

    #[error("Failed to serialize symbol map")]
    SymbolMap(#[source] serde_yaml::Error),
}

/// An error tied to the source line (0-based) that caused it.
#[derive(Error, Debug)]
#[error("line {}: {error}", .idx + 1)]
pub struct Located {
    pub idx: usize,
    #[source]
    pub error: Error,
}

impl Error {
    pub fn at(self, idx: usize) -> Located {
        Located { idx, error: self }
    }

    pub fn print(&self) {
        cprintln!("<red,bold>error</>: {}", self);
        if let Some(source) = std::error::Error::source(self) {
            cprintln!("       <blue>=</> {}", source);
        }
    }
}

impl Located {
    /// Print error with the file location and the offending line
    pub fn print_diag(&self, file: &str, raw: &[String]) {
        cprintln!("<red,bold>error</>: {}", self.error);
        print_location(file, raw, self.idx);
    }
}
