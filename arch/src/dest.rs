use num_enum::{IntoPrimitive, TryFromPrimitive};
use strum::{Display, EnumIter, EnumString};

/// Destination field. Bits are `A D M` from high to low.
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
pub enum Dest {
    #[default]
    #[strum(serialize = "null")]
    Null = 0b000,
    M = 0b001,
    D = 0b010,
    MD = 0b011,
    A = 0b100,
    AM = 0b101,
    AD = 0b110,
    #[strum(to_string = "AMD", serialize = "ADM")]
    AMD = 0b111,
}

impl Dest {
    pub fn parse(s: &str) -> Result<Self, String> {
        match s.parse::<Self>() {
            Ok(d) => Ok(d),
            Err(_) => Err(format!("Unknown destination: {s}")),
        }
    }
}

#[test]
fn test() {
    use strum::IntoEnumIterator;
    assert_eq!(Dest::iter().count(), 8);
    for (code, dest) in Dest::iter().enumerate() {
        assert_eq!(u8::from(dest) as usize, code);
        assert_eq!(Dest::parse(&dest.to_string()), Ok(dest));
    }
    assert_eq!(Dest::parse("ADM"), Ok(Dest::AMD));
    assert_eq!(Dest::AMD.to_string(), "AMD");
    assert!(Dest::parse("DM").is_err());
    assert!(Dest::parse("").is_err());
}
