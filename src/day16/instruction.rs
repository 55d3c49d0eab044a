use crate::cube::{CubeState, Role};
use crate::error::{CubeError, Result};

/// Which cells of a face an instruction touches. Indices are zero-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    Face,
    Row(usize),
    Column(usize),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Instruction {
    pub scope: Scope,
    pub magnitude: i64,
}

/// How far a row or column instruction reaches beyond the front face.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Propagation {
    CurrentFace,
    /// Rows continue through left, right and back; columns through up, down and back.
    Wraparound,
}

impl Scope {
    pub fn from_keyword(keyword: &str, index: Option<usize>) -> Result<Scope> {
        match (keyword, index) {
            ("FACE", None) => Ok(Scope::Face),
            ("ROW", Some(row)) => Ok(Scope::Row(row)),
            ("COL", Some(col)) => Ok(Scope::Column(col)),
            ("FACE", Some(_)) => Err(CubeError::InvalidInstruction(
                "FACE takes no index".to_string(),
            )),
            ("ROW" | "COL", None) => Err(CubeError::InvalidInstruction(format!(
                "{} needs an index",
                keyword
            ))),
            _ => Err(CubeError::InvalidInstruction(format!(
                "unknown scope {:?}",
                keyword
            ))),
        }
    }

    /// Number of cells the scope covers on a face of the given size.
    pub fn breadth(&self, size: usize) -> u64 {
        let size = size as u64;
        match self {
            Scope::Face => size * size,
            Scope::Row(_) | Scope::Column(_) => size,
        }
    }

    fn check(&self, size: usize) -> Result<()> {
        match *self {
            Scope::Face => Ok(()),
            Scope::Row(index) | Scope::Column(index) if index >= size => {
                Err(CubeError::IndexOutOfRange { index, size })
            }
            Scope::Row(_) | Scope::Column(_) => Ok(()),
        }
    }
}

impl Instruction {
    pub fn new(scope: Scope, magnitude: i64) -> Instruction {
        Instruction { scope, magnitude }
    }

    pub fn power(&self, size: usize) -> u128 {
        u128::from(self.magnitude.unsigned_abs()) * u128::from(self.scope.breadth(size))
    }
}

impl CubeState {
    /// Charges the current face for the instruction, then applies it.
    pub fn apply_instruction(&mut self, ins: Instruction, propagation: Propagation) -> Result<()> {
        let size = self.size();
        ins.scope.check(size)?;

        let id = self.current_face().id();
        self.absorb(id, ins.power(size))?;
        self.face_in_role_mut(Role::Front)
            .apply_delta(ins.scope, ins.magnitude)?;

        if propagation == Propagation::Wraparound {
            self.propagate(ins)?;
        }
        Ok(())
    }

    fn propagate(&mut self, ins: Instruction) -> Result<()> {
        match ins.scope {
            Scope::Face => {}
            Scope::Row(_) => {
                for role in [Role::Right, Role::Left] {
                    self.face_in_role_mut(role)
                        .apply_delta(ins.scope, ins.magnitude)?;
                }
                // The back face is seen upside down from the front.
                let back = self.face_in_role_mut(Role::Back);
                back.rotate_half_turn();
                back.apply_delta(ins.scope, ins.magnitude)?;
                back.rotate_half_turn();
            }
            Scope::Column(_) => {
                for role in [Role::Up, Role::Down, Role::Back] {
                    self.face_in_role_mut(role)
                        .apply_delta(ins.scope, ins.magnitude)?;
                }
            }
        }
        Ok(())
    }
}
