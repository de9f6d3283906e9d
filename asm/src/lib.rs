//! Two-pass assembler for the Hack computer.
//!
//! ```
//! let words = hackasm::assemble(["@2", "D=A", "(END)", "@END", "0;JMP"]).unwrap();
//! assert_eq!(words[0], "0000000000000010");
//! assert_eq!(words[2], "0000000000000010");
//! ```

pub mod encoder;
pub mod error;
pub mod label;
pub mod msg;
pub mod normalize;
pub mod parser;
pub mod symbol;
pub mod util;

pub use encoder::Encoded;
pub use error::{Error, Located};
pub use msg::Msg;
pub use symbol::SymbolTable;

/// Everything one run produces.
#[derive(Debug)]
pub struct Output {
    pub encoded: Vec<Encoded>,
    pub msgs: Vec<Msg>,
    pub symbols: SymbolTable,
}

impl Output {
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.encoded.iter().map(|e| e.word.as_str())
    }
}

pub struct Assembler;

impl Assembler {
    /// normalize -> collect labels -> resolve & encode
    pub fn run<I, S>(raw_lines: I) -> Result<Output, Located>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let lines = normalize::normalize(raw_lines);
        let (labels, lines, msgs) = label::extract(lines);
        let mut symbols = SymbolTable::new(labels);
        let encoded = encoder::encode(&lines, &mut symbols)?;
        Ok(Output {
            encoded,
            msgs,
            symbols,
        })
    }
}

/// Assemble raw source lines into 16-character binary words.
pub fn assemble<I, S>(raw_lines: I) -> Result<Vec<String>, Located>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    Assembler::run(raw_lines).map(|out| out.encoded.into_iter().map(|e| e.word).collect())
}
