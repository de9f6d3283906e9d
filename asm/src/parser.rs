use arch::{symbol::ADDRESS_MASK, Comp, Dest, Inst, Jump};

use crate::{error::Error, symbol::SymbolTable};

// ----------------------------------------------------------------------------
// Statement

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Stmt {
    A(Imm),
    C { dest: Dest, comp: Comp, jump: Jump },
}

impl Stmt {
    /// Parse one label-free, normalized instruction.
    ///
    /// Anything that is not `@...` is read as `dest=comp;jump` with `dest=`
    /// and `;jump` both optional, so unrecognised text fails on the
    /// computation lookup.
    pub fn parse(code: &str) -> Result<Stmt, Error> {
        if let Some(token) = code.strip_prefix('@') {
            return Imm::parse(token).map(Stmt::A);
        }

        let (dest, rest) = match code.split_once('=') {
            Some((dest, rest)) => (Some(dest), rest),
            None => (None, code),
        };
        let (comp, jump) = match rest.split_once(';') {
            Some((comp, jump)) => (comp, Some(jump)),
            None => (rest, None),
        };

        let dest = match dest {
            Some(d) => Dest::parse(d).map_err(|_| Error::UnknownDest(d.to_string()))?,
            None => Dest::Null,
        };
        let comp = Comp::parse(comp).map_err(|_| Error::UnknownComp(comp.to_string()))?;
        let jump = match jump {
            Some(j) => Jump::parse(j).map_err(|_| Error::UnknownJump(j.to_string()))?,
            None => Jump::Null,
        };

        Ok(Stmt::C { dest, comp, jump })
    }

    pub fn resolve(&self, symbols: &mut SymbolTable) -> Inst {
        match self {
            Stmt::A(imm) => Inst::A(imm.resolve(symbols)),
            Stmt::C { dest, comp, jump } => Inst::C {
                dest: *dest,
                comp: *comp,
                jump: *jump,
            },
        }
    }
}

// ----------------------------------------------------------------------------
// Immediate

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Imm {
    Literal(u16),
    Ident(String),
}

impl Imm {
    fn parse(s: &str) -> Result<Imm, Error> {
        if s.is_empty() {
            return Err(Error::MissingSymbol);
        }
        match parse_literal(s) {
            Some(v) => Ok(Imm::Literal(v)),
            None => Ok(Imm::Ident(s.to_string())),
        }
    }

    pub fn resolve(&self, symbols: &mut SymbolTable) -> u16 {
        match self {
            Imm::Literal(v) => *v,
            Imm::Ident(name) => symbols.resolve(name),
        }
    }
}

/// Decimal literal reduced to the 15-bit address space.
fn parse_literal(s: &str) -> Option<u16> {
    if !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let modulus = ADDRESS_MASK as u32 + 1;
    let value = s
        .bytes()
        .fold(0u32, |acc, b| (acc * 10 + (b - b'0') as u32) % modulus);
    Some(value as u16)
}
