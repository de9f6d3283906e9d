use arch::Inst;

use crate::{error::Located, normalize::Line, parser::Stmt, symbol::SymbolTable};

/// One emitted machine word and where it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Encoded {
    pub idx: usize,
    pub pc: u16,
    pub inst: Inst,
    pub word: String,
}

/// Second pass. Expects every label of the program to be in `symbols`
/// already; stops at the first malformed instruction.
pub fn encode(lines: &[Line], symbols: &mut SymbolTable) -> Result<Vec<Encoded>, Located> {
    let mut out = Vec::with_capacity(lines.len());
    for (pc, line) in lines.iter().enumerate() {
        let stmt = Stmt::parse(&line.code).map_err(|e| e.at(line.idx))?;
        let inst = stmt.resolve(symbols);
        out.push(Encoded {
            idx: line.idx,
            pc: pc as u16,
            inst,
            word: inst.to_word(),
        });
    }
    Ok(out)
}
