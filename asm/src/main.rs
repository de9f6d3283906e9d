use clap::Parser;
use color_print::cprintln;
use hackasm::{msg, util, Assembler, Error};
use std::{
    fs::File,
    io::{BufRead, BufReader, BufWriter, Write},
    path::Path,
};

const HELP_TEMPLATE: &str = "\
{before-help}{bin} {version}
  {about}

{usage-heading}
{tab}{usage}

{all-args}{after-help}";

#[derive(Debug, clap::Parser)]
#[clap(version, about, help_template = HELP_TEMPLATE)]
struct Args {
    /// Input file
    input: String,

    /// Output file [default: <input>.hack]
    #[clap(short, long)]
    output: Option<String>,

    /// Dump listing
    #[clap(short, long)]
    dump: bool,

    /// Write labels and variables to a YAML file
    #[clap(short, long)]
    symbols: Option<String>,
}

fn main() {
    let args: Args = Args::parse();
    println!("Hack Assembler");

    let output = args
        .output
        .clone()
        .unwrap_or_else(|| default_output(&args.input));

    println!("1. Read File");
    println!("  < {}", args.input);
    let raw = match read_lines(&args.input) {
        Ok(raw) => raw,
        Err(e) => fail(e),
    };

    println!("2. Collect Labels & Resolve Symbols");
    let out = match Assembler::run(&raw) {
        Ok(out) => out,
        Err(e) => {
            e.print_diag(&args.input, &raw);
            std::process::exit(1);
        }
    };
    msg::dump(&out.msgs, &args.input, &raw);
    println!("  - found #{} labels", out.symbols.labels().len());
    println!("  - allocated #{} variables", out.symbols.variable_count());

    println!("3. Write Binary");
    println!("  > {}", output);
    if let Err(e) = write_lines(&output, out.words()) {
        fail(e);
    }
    if let Some(path) = &args.symbols {
        println!("  > {}", path);
        let yaml = match out.symbols.to_map().to_yaml() {
            Ok(yaml) => yaml,
            Err(e) => fail(Error::SymbolMap(e)),
        };
        if let Err(e) = write_lines(path, std::iter::once(yaml.trim_end())) {
            fail(e);
        }
    }

    if args.dump {
        util::print_dump(&args.input, &raw, &out);
    }
    cprintln!("<g,s>Finished</> {} words", out.encoded.len());
}

fn fail(e: Error) -> ! {
    e.print();
    std::process::exit(1);
}

/// `Prog.asm` -> `Prog.hack`
fn default_output(input: &str) -> String {
    Path::new(input)
        .with_extension("hack")
        .to_string_lossy()
        .into_owned()
}

fn read_lines(path: &str) -> Result<Vec<String>, Error> {
    let file = File::open(path).map_err(|e| Error::FileOpen(path.to_string(), e))?;
    BufReader::new(file)
        .lines()
        .collect::<Result<Vec<_>, _>>()
        .map_err(Error::FileRead)
}

fn write_lines<'a>(path: &str, lines: impl Iterator<Item = &'a str>) -> Result<(), Error> {
    let file = File::create(path).map_err(|e| Error::FileCreate(path.to_string(), e))?;
    let mut w = BufWriter::new(file);
    for line in lines {
        writeln!(w, "{}", line).map_err(|e| Error::FileWrite(path.to_string(), e))?;
    }
    w.flush().map_err(|e| Error::FileWrite(path.to_string(), e))
}

#[test]
fn test_default_output() {
    assert_eq!(default_output("Prog.asm"), "Prog.hack");
    assert_eq!(default_output("dir/Max.asm"), "dir/Max.hack");
    assert_eq!(default_output("noext"), "noext.hack");
}
