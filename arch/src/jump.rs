use num_enum::{IntoPrimitive, TryFromPrimitive};
use strum::{Display, EnumIter, EnumString};

/// Jump condition. Bits are `lt eq gt` from high to low.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    IntoPrimitive,
    TryFromPrimitive,
    EnumString,
    EnumIter,
    Display,
)]
#[repr(u8)]
pub enum Jump {
    #[default]
    #[strum(serialize = "null")]
    Null = 0b000,
    JGT = 0b001,
    JEQ = 0b010,
    JGE = 0b011,
    JLT = 0b100,
    JNE = 0b101,
    JLE = 0b110,
    JMP = 0b111,
}

impl Jump {
    pub fn parse(s: &str) -> Result<Self, String> {
        match s.parse::<Self>() {
            Ok(j) => Ok(j),
            Err(_) => Err(format!("Unknown jump: {s}")),
        }
    }
}

#[test]
fn test() {
    use strum::IntoEnumIterator;
    assert_eq!(Jump::iter().count(), 8);
    for (code, jump) in Jump::iter().enumerate() {
        assert_eq!(u8::from(jump) as usize, code);
        assert_eq!(Jump::parse(&jump.to_string()), Ok(jump));
    }
    assert_eq!(u8::from(Jump::JLE), 0b110);
    assert!(Jump::parse("jmp").is_err());
}
