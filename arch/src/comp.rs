use num_enum::{IntoPrimitive, TryFromPrimitive};
use strum::{Display, EnumIter, EnumString};

/// ALU computation. The discriminant is the 7-bit `a cccccc` field.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    IntoPrimitive,
    TryFromPrimitive,
    EnumString,
    EnumIter,
    Display,
)]
#[repr(u8)]
pub enum Comp {
    #[strum(serialize = "0")]
    Zero = 0b0_101010,
    #[strum(serialize = "1")]
    One = 0b0_111111,
    #[strum(serialize = "-1")]
    NegOne = 0b0_111010,
    #[strum(serialize = "D")]
    D = 0b0_001100,
    #[strum(serialize = "A")]
    A = 0b0_110000,
    #[strum(serialize = "!D")]
    NotD = 0b0_001101,
    #[strum(serialize = "!A")]
    NotA = 0b0_110001,
    #[strum(serialize = "-D")]
    NegD = 0b0_001111,
    #[strum(serialize = "-A")]
    NegA = 0b0_110011,
    #[strum(serialize = "D+1")]
    DPlusOne = 0b0_011111,
    #[strum(serialize = "A+1")]
    APlusOne = 0b0_110111,
    #[strum(serialize = "D-1")]
    DMinusOne = 0b0_001110,
    #[strum(serialize = "A-1")]
    AMinusOne = 0b0_110010,
    #[strum(serialize = "D+A")]
    DPlusA = 0b0_000010,
    #[strum(serialize = "D-A")]
    DMinusA = 0b0_010011,
    #[strum(serialize = "A-D")]
    AMinusD = 0b0_000111,
    #[strum(serialize = "D&A")]
    DAndA = 0b0_000000,
    #[strum(serialize = "D|A")]
    DOrA = 0b0_010101,

    // a = 1: M takes the place of A
    #[strum(serialize = "M")]
    M = 0b1_110000,
    #[strum(serialize = "!M")]
    NotM = 0b1_110001,
    #[strum(serialize = "-M")]
    NegM = 0b1_110011,
    #[strum(serialize = "M+1")]
    MPlusOne = 0b1_110111,
    #[strum(serialize = "M-1")]
    MMinusOne = 0b1_110010,
    #[strum(serialize = "D+M")]
    DPlusM = 0b1_000010,
    #[strum(serialize = "D-M")]
    DMinusM = 0b1_010011,
    #[strum(serialize = "M-D")]
    MMinusD = 0b1_000111,
    #[strum(serialize = "D&M")]
    DAndM = 0b1_000000,
    #[strum(serialize = "D|M")]
    DOrM = 0b1_010101,
}

impl Comp {
    pub fn parse(s: &str) -> Result<Self, String> {
        match s.parse::<Self>() {
            Ok(c) => Ok(c),
            Err(_) => Err(format!("Unknown computation: {s}")),
        }
    }
}
