use arch::{Comp, Dest, Jump};
use hackasm::{assemble, Assembler, Error};
use std::collections::HashSet;
use strum::IntoEnumIterator;

fn check(code: &str, expects: &[&str]) {
    let words = assemble(code.lines()).unwrap();
    for (idx, word) in words.iter().enumerate() {
        println!("{:>2}: {}", idx, word);
    }
    assert_eq!(words, expects);
}

macro_rules! case {
    ($name:ident, $code:expr, [$($word:expr),* $(,)?]) => {
        #[test]
        fn $name() {
            check($code, &[$($word),*]);
        }
    };
}

case!(
    add,
    "// Computes R0 = 2 + 3\n@2\nD=A\n@3\nD=D+A\n@0\nM=D\n",
    [
        "0000000000000010",
        "1110110000010000",
        "0000000000000011",
        "1110000010010000",
        "0000000000000000",
        "1110001100001000",
    ]
);

case!(
    max,
    "   @R0
   D=M              // D = first number
   @R1
   D=D-M            // D = first number - second number
   @OUTPUT_FIRST
   D;JGT            // if D>0 (first is greater) goto output_first
   @R1
   D=M              // D = second number
   @OUTPUT_D
   0;JMP            // goto output_d
(OUTPUT_FIRST)
   @R0
   D=M              // D = first number
(OUTPUT_D)
   @R2
   M=D              // M[2] = D (greatest number)
(INFINITE_LOOP)
   @INFINITE_LOOP
   0;JMP            // infinite loop
",
    [
        "0000000000000000",
        "1111110000010000",
        "0000000000000001",
        "1111010011010000",
        "0000000000001010",
        "1110001100000001",
        "0000000000000001",
        "1111110000010000",
        "0000000000001100",
        "1110101010000111",
        "0000000000000000",
        "1111110000010000",
        "0000000000000010",
        "1110001100001000",
        "0000000000001110",
        "1110101010000111",
    ]
);

case!(
    forward_label,
    "@LOOP\n0;JMP\n(LOOP)",
    ["0000000000000010", "1110101010000111"]
);

case!(
    variables_first_seen_order,
    "@x\n@y\n@x",
    ["0000000000010000", "0000000000010001", "0000000000010000"]
);

case!(
    forward_label_mid_program,
    "@LOOP\n(LOOP)\n0;JMP",
    ["0000000000000001", "1110101010000111"]
);

case!(d_plus_one, "D=D+1", ["1110011111010000"]);

case!(
    label_is_not_a_variable,
    "@i\n@END\n@j\n(END)\n@END",
    [
        "0000000000010000",
        "0000000000000011",
        "0000000000010001",
        "0000000000000011",
    ]
);

case!(
    oversized_literal_keeps_bit_15_clear,
    "@32767\n@32768\n@65535",
    ["0111111111111111", "0000000000000000", "0111111111111111"]
);

case!(empty_program, "// nothing\n\n   \n(ONLY_A_LABEL)", []);

#[test]
fn predefined_symbols() {
    let table: &[(&str, u16)] = &[
        ("SP", 0),
        ("LCL", 1),
        ("ARG", 2),
        ("THIS", 3),
        ("THAT", 4),
        ("SCREEN", 16384),
        ("KBD", 24576),
    ];
    let mut expects: Vec<(String, u16)> = (0..16).map(|n| (format!("R{n}"), n)).collect();
    expects.extend(table.iter().map(|(name, addr)| (name.to_string(), *addr)));

    for (name, addr) in expects {
        // Same answer regardless of surrounding program
        for program in [
            vec![format!("@{name}")],
            vec!["@foo".to_string(), "(L)".to_string(), format!("@{name}")],
        ] {
            let words = assemble(&program).unwrap();
            assert_eq!(
                words.last().unwrap(),
                &format!("{:016b}", addr),
                "symbol {}",
                name
            );
        }
    }
}

#[test]
fn every_compute_triple_is_unique() {
    let mut seen = HashSet::new();
    for comp in Comp::iter() {
        for dest in Dest::iter() {
            for jump in Jump::iter() {
                let code = format!("{}={};{}", dest, comp, jump);
                let words = assemble([code.as_str()]).unwrap();
                let word = &words[0];
                assert_eq!(word.len(), 16);
                assert!(word.starts_with("111"), "{} -> {}", code, word);
                assert!(seen.insert(word.clone()), "duplicate word for {}", code);
            }
        }
    }
    assert_eq!(seen.len(), 28 * 8 * 8);
}

#[test]
fn malformed_computation_fails_the_run() {
    let err = assemble(["@1", "D=A", "X", "@2"]).unwrap_err();
    assert_eq!(err.idx, 2);
    assert!(matches!(err.error, Error::UnknownComp(ref s) if s == "X"));
}

#[test]
fn malformed_destination_and_jump_fail() {
    assert!(matches!(
        assemble(["MA=1"]).unwrap_err().error,
        Error::UnknownDest(_)
    ));
    assert!(matches!(
        assemble(["0;JUMP"]).unwrap_err().error,
        Error::UnknownJump(_)
    ));
    assert!(matches!(
        assemble(["@"]).unwrap_err().error,
        Error::MissingSymbol
    ));
}

#[test]
fn duplicate_label_warns_and_last_wins() {
    let out = Assembler::run(["(L)", "@1", "(L)", "@L"]).unwrap();
    let words: Vec<&str> = out.words().collect();
    assert_eq!(words, vec!["0000000000000001", "0000000000000001"]);
    assert_eq!(out.msgs.len(), 2);
    assert_eq!(out.msgs[0].idx, 2);
}

#[test]
fn runs_are_independent() {
    let a = Assembler::run(["@x", "@y"]).unwrap();
    let b = Assembler::run(["@y"]).unwrap();
    assert_eq!(a.encoded[1].word, "0000000000010001");
    assert_eq!(b.encoded[0].word, "0000000000010000");
}

#[test]
fn comments_and_whitespace() {
    let words = assemble([
        "// header",
        "   @2     // inline",
        "\tD=A\t// tabbed",
        "",
        "      ",
    ])
    .unwrap();
    assert_eq!(words, vec!["0000000000000010", "1110110000010000"]);
}
