use arch::Inst;
use color_print::cformat;
use std::collections::HashMap;

use crate::{label::parse_label, normalize::strip, Output};

/// Listing of the source with ROM address and machine word per line.
pub fn print_dump(path: &str, raw: &[String], out: &Output) {
    let encoded: HashMap<usize, _> = out.encoded.iter().map(|e| (e.idx, e)).collect();

    println!(
        "{}+------[{}]{}",
        "-".repeat(24),
        path,
        "-".repeat(45usize.saturating_sub(path.len()))
    );
    for (idx, line) in raw.iter().enumerate() {
        let comment = match line.split_once("//") {
            Some((_, c)) => cformat!("<dim>//{}</>", c),
            None => String::new(),
        };
        let line_num = idx + 1;

        let body = match encoded.get(&idx) {
            Some(e) => format!(
                "[{:04X}] {} | {:>4}:   {} {}",
                e.pc,
                e.word,
                line_num,
                decode(&e.word),
                comment
            ),
            None => match parse_label(strip(line)) {
                Some(name) => {
                    let pc = out.symbols.labels().get(name).unwrap_or_default();
                    let label = cformat!("<g>({})</> <dim>= 0x{:04X}</>", name, pc);
                    format!("{:24}| {:>4}: {} {}", "", line_num, label, comment)
                }
                None => format!("{:24}| {:>4}: {}", "", line_num, comment),
            },
        };
        println!("{}", body);
    }
    println!("------------------------+-----------------------------------------------------");

    let mut variables = out.symbols.variables().peekable();
    if variables.peek().is_some() {
        for (name, addr) in variables {
            println!("{}", cformat!("<c>@0x{:04X} {}</>", addr, name));
        }
        println!("------------------------+-----------------------------------------------------");
    }
}

/// Disassemble an emitted word, so the listing shows what was written.
fn decode(word: &str) -> String {
    match u16::from_str_radix(word, 2).map_err(|e| e.to_string()).and_then(Inst::from_bin) {
        Ok(inst) => inst.cformat(),
        Err(_) => cformat!("<r,s>?? {}</>", word),
    }
}
