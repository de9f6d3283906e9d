use arch::symbol::ADDRESS_MASK;
use indexmap::IndexMap;

use crate::{msg::Msg, normalize::Line};

/// Label name -> (declaring line index, ROM address)
#[derive(Debug, Clone, Default)]
pub struct Labels {
    labels: IndexMap<String, (usize, u16)>,
}

impl Labels {
    pub fn new() -> Self {
        Labels {
            labels: IndexMap::new(),
        }
    }

    pub fn insert(&mut self, name: String, idx: usize, pc: u16) -> Option<(usize, u16)> {
        self.labels.insert(name, (idx, pc))
    }

    pub fn get(&self, name: &str) -> Option<u16> {
        self.labels.get(name).map(|(_, pc)| *pc)
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u16)> {
        self.labels
            .iter()
            .map(|(name, (_, pc))| (name.as_str(), *pc))
    }
}

/// Instructions addressable by a 15-bit A-instruction.
const ROM_SIZE: u16 = ADDRESS_MASK + 1;

/// `(NAME)` -> `NAME`
pub fn parse_label(code: &str) -> Option<&str> {
    code.strip_prefix('(')?.strip_suffix(')')
}

/// First pass. Removes label declarations and records the ROM address of
/// the instruction that follows each one.
pub fn extract(lines: Vec<Line>) -> (Labels, Vec<Line>, Vec<Msg>) {
    let mut labels = Labels::new();
    let mut insts = Vec::with_capacity(lines.len());
    let mut msgs = vec![];
    let mut pc: u16 = 0;

    for line in lines {
        match parse_label(&line.code) {
            Some(name) => {
                if let Some((prev, _)) = labels.insert(name.to_string(), line.idx, pc) {
                    msgs.push(Msg::warn(format!("Re-defined label: `{}`", name), line.idx));
                    msgs.push(Msg::note(
                        "Already defined here. The value has been overridden.".to_string(),
                        prev,
                    ));
                }
            }
            None => {
                if pc == ROM_SIZE {
                    let msg = format!("Program exceeds {} instructions; addresses wrap", ROM_SIZE);
                    msgs.push(Msg::warn(msg, line.idx));
                }
                insts.push(line);
                pc = pc.wrapping_add(1);
            }
        }
    }

    (labels, insts, msgs)
}
