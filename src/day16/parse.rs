use regex::Regex;

use crate::error::{CubeError, Result};
use crate::instruction::{Instruction, Scope};
use crate::twist::Twist;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Puzzle {
    pub instructions: Vec<Instruction>,
    pub twists: Vec<Twist>,
}

pub struct Tokenizer {
    re: Regex,
}

impl Tokenizer {
    pub fn new() -> Result<Tokenizer> {
        let re = Regex::new(
            r"^(?P<keyword>[A-Za-z]+)(?: (?P<index>[0-9]+))? - VALUE (?P<value>-?[0-9]+)$",
        )
        .map_err(|e| CubeError::Parse(e.to_string()))?;
        Ok(Tokenizer { re })
    }

    /// Parses `FACE - VALUE <int>`, `ROW <n> - VALUE <int>` or `COL <n> - VALUE <int>`.
    /// Row and column numbers are one-based in the text.
    pub fn parse_instruction(&self, line: &str) -> Result<Instruction> {
        let line = line.trim();
        let captures = match self.re.captures(line) {
            Some(captures) => captures,
            None => return Err(CubeError::Parse(format!("bad instruction line: {:?}", line))),
        };

        let magnitude: i64 = captures["value"]
            .parse()
            .map_err(|_| CubeError::Parse(format!("bad value in {:?}", line)))?;

        let index = match captures.name("index") {
            None => None,
            Some(m) => {
                let one_based: usize = m
                    .as_str()
                    .parse()
                    .map_err(|_| CubeError::Parse(format!("bad index in {:?}", line)))?;
                if one_based == 0 {
                    return Err(CubeError::Parse(format!("indices start at 1: {:?}", line)));
                }
                Some(one_based - 1)
            }
        };

        let scope = Scope::from_keyword(&captures["keyword"], index)?;
        Ok(Instruction::new(scope, magnitude))
    }
}

pub fn parse_twists(block: &str) -> Result<Vec<Twist>> {
    block.trim().chars().map(Twist::from_char).collect()
}

/// Splits the input at its first blank line into instruction lines and the twist block.
pub fn split_sections(text: &str) -> Result<(Vec<&str>, &str)> {
    let (instruction_block, twist_block) = match text.split_once("\n\n") {
        Some(parts) => parts,
        None => {
            return Err(CubeError::Parse(
                "expected instructions and twists separated by a blank line".to_string(),
            ))
        }
    };

    let instructions = instruction_block
        .split('\n')
        .map(|line| line.trim())
        .filter(|line| !line.is_empty())
        .collect();

    Ok((instructions, twist_block.trim()))
}

impl Puzzle {
    pub fn parse(text: &str) -> Result<Puzzle> {
        let text = text.replace("\r\n", "\n");
        let (lines, twist_block) = split_sections(&text)?;
        let tokenizer = Tokenizer::new()?;

        let instructions = lines
            .iter()
            .map(|line| tokenizer.parse_instruction(line))
            .collect::<Result<Vec<Instruction>>>()?;
        let twists = parse_twists(twist_block)?;

        Ok(Puzzle {
            instructions,
            twists,
        })
    }

    /// Every instruction with the twist that follows it; missing twists are `Twist::None`.
    pub fn steps(&self) -> impl Iterator<Item = (Instruction, Twist)> + '_ {
        self.instructions.iter().enumerate().map(|(i, ins)| {
            let twist = self.twists.get(i).copied().unwrap_or(Twist::None);
            (*ins, twist)
        })
    }
}
