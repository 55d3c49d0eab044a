use crate::error::{CubeError, Result};
use crate::grid::FaceGrid;

pub type FaceId = usize;

pub const FACE_COUNT: usize = 6;

/// Where a face currently sits, relative to the viewer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Front,
    Back,
    Left,
    Up,
    Right,
    Down,
}

impl Role {
    pub fn all() -> [Role; FACE_COUNT] {
        [
            Role::Front,
            Role::Back,
            Role::Left,
            Role::Up,
            Role::Right,
            Role::Down,
        ]
    }

    pub fn to_index(self) -> usize {
        match self {
            Role::Front => 0,
            Role::Back => 1,
            Role::Left => 2,
            Role::Up => 3,
            Role::Right => 4,
            Role::Down => 5,
        }
    }
}

/// The whole cube: six faces, which face is in which role, and how much each face has absorbed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CubeState {
    size: usize,
    faces: Vec<FaceGrid>,
    // Indexed by Role::to_index.
    roles: [FaceId; FACE_COUNT],
    absorption: [u128; FACE_COUNT],
}

fn slot(id: FaceId) -> usize {
    id - 1
}

impl CubeState {
    /// Faces 1..=6 start out as front, back, left, up, right and down respectively.
    pub fn new(size: usize) -> CubeState {
        let faces = (1..=FACE_COUNT).map(|id| FaceGrid::new(id, size)).collect();
        let mut roles = [0; FACE_COUNT];
        for (index, role) in Role::all().iter().enumerate() {
            roles[role.to_index()] = index + 1;
        }
        CubeState {
            size,
            faces,
            roles,
            absorption: [0; FACE_COUNT],
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn faces(&self) -> &[FaceGrid] {
        &self.faces
    }

    pub fn face(&self, id: FaceId) -> &FaceGrid {
        &self.faces[slot(id)]
    }

    pub fn id_in_role(&self, role: Role) -> FaceId {
        self.roles[role.to_index()]
    }

    pub fn face_in_role(&self, role: Role) -> &FaceGrid {
        self.face(self.id_in_role(role))
    }

    pub(crate) fn face_in_role_mut(&mut self, role: Role) -> &mut FaceGrid {
        let id = self.id_in_role(role);
        &mut self.faces[slot(id)]
    }

    pub fn current_face(&self) -> &FaceGrid {
        self.face_in_role(Role::Front)
    }

    pub fn role_of(&self, id: FaceId) -> Option<Role> {
        Role::all()
            .into_iter()
            .find(|role| self.id_in_role(*role) == id)
    }

    pub fn absorption(&self, id: FaceId) -> u128 {
        self.absorption[slot(id)]
    }

    pub fn absorptions(&self) -> &[u128] {
        &self.absorption
    }

    pub(crate) fn absorb(&mut self, id: FaceId, power: u128) -> Result<()> {
        let total = &mut self.absorption[slot(id)];
        *total = total
            .checked_add(power)
            .ok_or(CubeError::Overflow("absorption"))?;
        Ok(())
    }

    /// Rebinds every role at once: the face that was in `sources[i]` moves to `Role::all()[i]`.
    pub(crate) fn rebind_roles(&mut self, sources: [Role; FACE_COUNT]) {
        let old = self.roles;
        for (role, source) in Role::all().iter().zip(sources.iter()) {
            self.roles[role.to_index()] = old[source.to_index()];
        }
    }

    #[cfg(test)]
    pub fn role_table_is_bijection(&self) -> bool {
        let mut seen = [false; FACE_COUNT];
        for id in self.roles {
            if id == 0 || id > FACE_COUNT || seen[slot(id)] {
                return false;
            }
            seen[slot(id)] = true;
        }
        true
    }
}
