use crate::{comp::Comp, dest::Dest, jump::Jump, symbol::ADDRESS_MASK};
use color_print::cformat;
use std::fmt;

const C_PREFIX: u16 = 0b111 << 13;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Inst {
    /// `@value`
    A(u16),
    /// `dest=comp;jump`
    C { dest: Dest, comp: Comp, jump: Jump },
}

impl Inst {
    pub fn to_bin(&self) -> u16 {
        match self {
            Inst::A(value) => value & ADDRESS_MASK,
            Inst::C { dest, comp, jump } => {
                C_PREFIX
                    | (u8::from(*comp) as u16) << 6
                    | (u8::from(*dest) as u16) << 3
                    | u8::from(*jump) as u16
            }
        }
    }

    /// Textual machine word, MSB first.
    pub fn to_word(&self) -> String {
        format!("{:016b}", self.to_bin())
    }

    pub fn from_bin(bin: u16) -> Result<Inst, String> {
        if bin & 0x8000 == 0 {
            return Ok(Inst::A(bin));
        }
        if bin & C_PREFIX != C_PREFIX {
            return Err(format!("Undefined Inst: {:016b}", bin));
        }
        let comp = Comp::try_from(((bin >> 6) & 0x7F) as u8)
            .map_err(|_| format!("Undefined computation in {:016b}", bin))?;
        let dest = Dest::try_from(((bin >> 3) & 0x7) as u8)
            .map_err(|_| format!("Undefined destination in {:016b}", bin))?;
        let jump = Jump::try_from((bin & 0x7) as u8)
            .map_err(|_| format!("Undefined jump in {:016b}", bin))?;
        Ok(Inst::C { dest, comp, jump })
    }
}

impl fmt::Display for Inst {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Inst::A(value) => write!(f, "@{}", value),
            Inst::C { dest, comp, jump } => {
                if *dest != Dest::Null {
                    write!(f, "{}=", dest)?;
                }
                write!(f, "{}", comp)?;
                if *jump != Jump::Null {
                    write!(f, ";{}", jump)?;
                }
                Ok(())
            }
        }
    }
}

impl Inst {
    pub fn cformat(&self) -> String {
        match self {
            Inst::A(value) => cformat!("<r>@</><y>0x{:0>4X}</> <y>{:<5}</>", value, value),
            Inst::C { dest, comp, jump } => {
                let dest = match dest {
                    Dest::Null => String::new(),
                    d => format!("{}=", d),
                };
                let jump = match jump {
                    Jump::Null => String::new(),
                    j => format!(";{}", j),
                };
                cformat!("<b>{:>4}</><r>{:<3}</><b>{:<4}</>", dest, comp, jump)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    macro_rules! test_inst {
        ($($name:ident: $inst:expr => $word:expr,)*) => {
            $(
                #[test]
                fn $name() {
                    let inst = $inst;
                    assert_eq!(inst.to_word(), $word);
                    assert_eq!(Inst::from_bin(inst.to_bin()), Ok(inst));
                }
            )*
        }
    }

    test_inst! {
        test_a_zero: Inst::A(0) => "0000000000000000",
        test_a_screen: Inst::A(16384) => "0100000000000000",
        test_a_max: Inst::A(0x7FFF) => "0111111111111111",
        test_d_eq_d_plus_1: Inst::C { dest: Dest::D, comp: Comp::DPlusOne, jump: Jump::Null } => "1110011111010000",
        test_m_eq_d: Inst::C { dest: Dest::M, comp: Comp::D, jump: Jump::Null } => "1110001100001000",
        test_d_eq_a: Inst::C { dest: Dest::D, comp: Comp::A, jump: Jump::Null } => "1110110000010000",
        test_jmp: Inst::C { dest: Dest::Null, comp: Comp::Zero, jump: Jump::JMP } => "1110101010000111",
        test_amd_m_minus_1_jle: Inst::C { dest: Dest::AMD, comp: Comp::MMinusOne, jump: Jump::JLE } => "1111110010111110",
    }

    #[test]
    fn a_bit_15_is_masked() {
        assert_eq!(Inst::A(0xFFFF).to_word(), "0111111111111111");
    }

    #[test]
    fn display() {
        let inst = Inst::C { dest: Dest::AM, comp: Comp::MPlusOne, jump: Jump::JNE };
        assert_eq!(inst.to_string(), "AM=M+1;JNE");
        let inst = Inst::C { dest: Dest::Null, comp: Comp::D, jump: Jump::JGT };
        assert_eq!(inst.to_string(), "D;JGT");
        assert_eq!(Inst::A(42).to_string(), "@42");
    }

    #[test]
    fn undefined_words() {
        assert!(Inst::from_bin(0b1000_0000_0000_0000).is_err());
        // comp 0b0_000001 is not in the table
        assert!(Inst::from_bin(0b1110_0000_0100_0000).is_err());
    }
}
