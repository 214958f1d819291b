//! A single instruction snapshot parsed from one delimiter-separated chunk
//!
//! Each chunk the emulator emits at full verbosity is a register dump (one
//! `name  value` line per register, program counter last), a disassembly line,
//! and a trailing newline.  Splitting on `'\n'` therefore yields the register
//! lines, the mnemonic line, and one empty final element, which is discarded.

/// Name of the register the emulator always prints first.  A chunk that does
/// not start with it is startup/debug output, not an instruction record.
pub const FIRST_REGISTER: &str = "eax";

/// One emulated instruction: its register state and decoded disassembly
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstructionRecord {
    /// `(name, value-text)` pairs in emulator output order, program counter last
    registers: Vec<(String, String)>,
    /// The decoded mnemonic + operands line, verbatim
    disassembly: String,
}

impl InstructionRecord {
    /// Parse one raw chunk.  Returns `None` for chunks too short to hold a
    /// mnemonic line (fewer than two lines).
    pub fn parse(chunk: &str) -> Option<Self> {
        let lines: Vec<&str> = chunk.split('\n').collect();
        if lines.len() < 2 {
            return None;
        }
        let disassembly = lines[lines.len() - 2].to_string();
        let registers = lines[..lines.len() - 2]
            .iter()
            .map(|line| match line.split_once("  ") {
                Some((name, value)) => (name.to_string(), value.to_string()),
                None => (line.to_string(), String::new()),
            })
            .collect();
        Some(InstructionRecord {
            registers,
            disassembly,
        })
    }

    pub fn registers(&self) -> &[(String, String)] {
        &self.registers
    }

    /// The register line as the emulator printed it
    pub fn register_line(&self, position: usize) -> Option<String> {
        self.registers.get(position).map(|(name, value)| {
            if value.is_empty() {
                name.clone()
            } else {
                format!("{}  {}", name, value)
            }
        })
    }

    pub fn disassembly(&self) -> &str {
        &self.disassembly
    }
}
