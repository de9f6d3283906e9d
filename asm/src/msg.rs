use color_print::cprintln;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MsgKind {
    Warn,
    Note,
}

/// Non-fatal diagnostic attached to a source line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Msg {
    pub kind: MsgKind,
    pub msg: String,
    pub idx: usize,
}

impl Msg {
    pub fn warn(msg: String, idx: usize) -> Self {
        Msg {
            kind: MsgKind::Warn,
            msg,
            idx,
        }
    }

    pub fn note(msg: String, idx: usize) -> Self {
        Msg {
            kind: MsgKind::Note,
            msg,
            idx,
        }
    }
}

impl Msg {
    pub fn print(&self, file: &str, raw: &[String]) {
        match self.kind {
            MsgKind::Warn => cprintln!("<yellow,bold>warn</>: {}", self.msg),
            MsgKind::Note => cprintln!("<green,bold>note</>: {}", self.msg),
        }
        print_location(file, raw, self.idx);
    }
}

/// `--> file:line` followed by the source line in a gutter.
pub fn print_location(file: &str, raw: &[String], idx: usize) {
    // idx is 0-based, display as 1-based
    let line_num = idx + 1;
    let line_content = raw.get(idx).map(|s| s.as_str()).unwrap_or("");
    cprintln!("     <blue>--></> <underline>{}:{}</>", file, line_num);
    cprintln!("      <blue>|</>");
    cprintln!(" <blue>{:>4} |</> {}", line_num, line_content);
    cprintln!("      <blue>|</>");
}

pub fn dump(msgs: &[Msg], file: &str, raw: &[String]) {
    for msg in msgs {
        msg.print(file, raw);
    }
}
