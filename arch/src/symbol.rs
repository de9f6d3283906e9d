use once_cell::sync::Lazy;
use std::collections::HashMap;

/// First RAM address handed out to variables.
pub const VARIABLE_BASE: u16 = 16;

/// A-instructions carry 15 bits; bit 15 is always zero.
pub const ADDRESS_MASK: u16 = 0x7FFF;

pub const SCREEN: u16 = 0x4000;
pub const KBD: u16 = 0x6000;

static PREDEFINED: Lazy<HashMap<&'static str, u16>> = Lazy::new(|| {
    const REGISTERS: [&str; 16] = [
        "R0", "R1", "R2", "R3", "R4", "R5", "R6", "R7", "R8", "R9", "R10", "R11", "R12", "R13",
        "R14", "R15",
    ];
    let mut table: HashMap<&'static str, u16> = REGISTERS
        .iter()
        .enumerate()
        .map(|(idx, name)| (*name, idx as u16))
        .collect();
    // VM pointers alias R0..R4
    table.extend([("SP", 0), ("LCL", 1), ("ARG", 2), ("THIS", 3), ("THAT", 4)]);
    table.extend([("SCREEN", SCREEN), ("KBD", KBD)]);
    table
});

pub fn predefined(name: &str) -> Option<u16> {
    PREDEFINED.get(name).copied()
}

#[test]
fn test() {
    for n in 0..16 {
        assert_eq!(predefined(&format!("R{n}")), Some(n));
    }
    assert_eq!(predefined("SP"), Some(0));
    assert_eq!(predefined("LCL"), Some(1));
    assert_eq!(predefined("ARG"), Some(2));
    assert_eq!(predefined("THIS"), Some(3));
    assert_eq!(predefined("THAT"), Some(4));
    assert_eq!(predefined("SCREEN"), Some(16384));
    assert_eq!(predefined("KBD"), Some(24576));
    assert_eq!(predefined("R1O"), None);
    assert_eq!(predefined("R16"), None);
    assert_eq!(predefined("sp"), None);
}
