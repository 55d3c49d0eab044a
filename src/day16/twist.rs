use crate::cube::{CubeState, Role, FACE_COUNT};
use crate::error::{CubeError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Twist {
    Left,
    Up,
    Right,
    Down,
    None,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Rotation {
    Clockwise,
    CounterClockwise,
}

/// What a twist does: the old role each new role is taken from, and the two
/// side faces whose grids have to turn with the cube.
struct TwistMove {
    sources: [Role; FACE_COUNT],
    rotations: [(Role, Rotation); 2],
}

impl Twist {
    pub fn from_char(ch: char) -> Result<Twist> {
        match ch {
            'L' => Ok(Twist::Left),
            'U' => Ok(Twist::Up),
            'R' => Ok(Twist::Right),
            'D' => Ok(Twist::Down),
            c if c.is_whitespace() => Ok(Twist::None),
            c => Err(CubeError::InvalidTwist(c)),
        }
    }

    #[cfg(test)]
    pub fn inverse(&self) -> Twist {
        match self {
            Twist::Left => Twist::Right,
            Twist::Right => Twist::Left,
            Twist::Up => Twist::Down,
            Twist::Down => Twist::Up,
            Twist::None => Twist::None,
        }
    }

    // Sources are listed in Role::all() order: front, back, left, up, right, down.
    fn movement(&self) -> Option<TwistMove> {
        use Role::*;
        use Rotation::*;

        match self {
            Twist::Right => Some(TwistMove {
                sources: [Right, Left, Front, Up, Back, Down],
                rotations: [(Down, Clockwise), (Up, Clockwise)],
            }),
            Twist::Down => Some(TwistMove {
                sources: [Down, Up, Left, Front, Right, Back],
                rotations: [(Left, CounterClockwise), (Right, CounterClockwise)],
            }),
            Twist::Left => Some(TwistMove {
                sources: [Left, Right, Back, Up, Front, Down],
                rotations: [(Down, CounterClockwise), (Up, CounterClockwise)],
            }),
            Twist::Up => Some(TwistMove {
                sources: [Up, Down, Left, Back, Right, Front],
                rotations: [(Left, Clockwise), (Right, Clockwise)],
            }),
            Twist::None => None,
        }
    }
}

impl CubeState {
    /// Turns the whole cube. The front face's grid is never rotated here.
    pub fn twist(&mut self, twist: Twist) {
        let movement = match twist.movement() {
            Some(movement) => movement,
            None => return,
        };

        self.rebind_roles(movement.sources);

        for (role, rotation) in movement.rotations {
            let face = self.face_in_role_mut(role);
            match rotation {
                Rotation::Clockwise => face.rotate_clockwise(),
                Rotation::CounterClockwise => face.rotate_counter_clockwise(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::instruction::{Instruction, Propagation, Scope};
    use proptest::prelude::*;

    fn twists() -> [Twist; 5] {
        [Twist::Left, Twist::Up, Twist::Right, Twist::Down, Twist::None]
    }

    /// A cube where every face has a distinguishable, asymmetric pattern.
    fn marked_cube(size: usize) -> CubeState {
        let mut cube = CubeState::new(size);
        let path = [
            Twist::None,
            Twist::Right,
            Twist::Right,
            Twist::Right,
            Twist::Up,
            Twist::Up,
            Twist::Up,
        ];
        for (step, twist) in path.into_iter().enumerate() {
            cube.twist(twist);
            let step = step as i64;
            let row = Instruction::new(Scope::Row(0), 10 + step);
            let col = Instruction::new(Scope::Column(size - 1), 3 * step + 1);
            cube.apply_instruction(row, Propagation::CurrentFace).unwrap();
            cube.apply_instruction(col, Propagation::CurrentFace).unwrap();
        }
        cube
    }

    #[test]
    fn twist_letters_parse() {
        assert_eq!(Twist::from_char('L'), Ok(Twist::Left));
        assert_eq!(Twist::from_char('U'), Ok(Twist::Up));
        assert_eq!(Twist::from_char('R'), Ok(Twist::Right));
        assert_eq!(Twist::from_char('D'), Ok(Twist::Down));
        assert_eq!(Twist::from_char(' '), Ok(Twist::None));
        assert_eq!(Twist::from_char('X'), Err(CubeError::InvalidTwist('X')));
        assert_eq!(Twist::from_char('l'), Err(CubeError::InvalidTwist('l')));
    }

    #[test]
    fn none_twist_changes_nothing() {
        let mut cube = marked_cube(3);
        let before = cube.clone();
        cube.twist(Twist::None);
        assert_eq!(cube, before);
    }

    #[test]
    fn right_twist_brings_right_face_to_front() {
        let mut cube = CubeState::new(2);
        cube.twist(Twist::Right);
        assert_eq!(cube.id_in_role(Role::Front), 5);
        assert_eq!(cube.id_in_role(Role::Back), 3);
        assert_eq!(cube.id_in_role(Role::Left), 1);
        assert_eq!(cube.id_in_role(Role::Up), 4);
        assert_eq!(cube.id_in_role(Role::Right), 2);
        assert_eq!(cube.id_in_role(Role::Down), 6);
        assert!(cube.faces().iter().all(|f| f.dominant_sum() == 2));
    }

    #[test]
    fn down_twist_brings_down_face_to_front() {
        let mut cube = CubeState::new(2);
        cube.twist(Twist::Down);
        assert_eq!(cube.id_in_role(Role::Front), 6);
        assert_eq!(cube.id_in_role(Role::Back), 4);
        assert_eq!(cube.id_in_role(Role::Up), 1);
        assert_eq!(cube.id_in_role(Role::Down), 2);
        assert_eq!(cube.id_in_role(Role::Left), 3);
        assert_eq!(cube.id_in_role(Role::Right), 5);
    }

    #[test]
    fn right_twist_rotates_up_and_down_clockwise() {
        let mut cube = marked_cube(3);
        let mut expected_up = cube.face_in_role(Role::Up).clone();
        let mut expected_down = cube.face_in_role(Role::Down).clone();
        let front = cube.current_face().clone();
        expected_up.rotate_clockwise();
        expected_down.rotate_clockwise();

        cube.twist(Twist::Right);

        assert_eq!(cube.face_in_role(Role::Up), &expected_up);
        assert_eq!(cube.face_in_role(Role::Down), &expected_down);
        assert_eq!(cube.face_in_role(Role::Left), &front);
    }

    #[test]
    fn up_twist_rotates_left_and_right_clockwise() {
        let mut cube = marked_cube(3);
        let mut expected_left = cube.face_in_role(Role::Left).clone();
        let mut expected_right = cube.face_in_role(Role::Right).clone();
        let up = cube.face_in_role(Role::Up).clone();
        expected_left.rotate_clockwise();
        expected_right.rotate_clockwise();

        cube.twist(Twist::Up);

        assert_eq!(cube.face_in_role(Role::Left), &expected_left);
        assert_eq!(cube.face_in_role(Role::Right), &expected_right);
        assert_eq!(cube.current_face(), &up);
    }

    #[test]
    fn twists_never_rotate_the_new_front_face() {
        for twist in twists() {
            let mut cube = marked_cube(3);
            let incoming = match twist {
                Twist::Left => Role::Left,
                Twist::Up => Role::Up,
                Twist::Right => Role::Right,
                Twist::Down => Role::Down,
                Twist::None => Role::Front,
            };
            let expected = cube.face_in_role(incoming).clone();
            cube.twist(twist);
            assert_eq!(cube.current_face(), &expected, "{:?}", twist);
        }
    }

    #[test]
    fn four_equal_twists_return_to_start() {
        for twist in twists() {
            let mut cube = marked_cube(4);
            let before = cube.clone();
            for _ in 0..4 {
                cube.twist(twist);
            }
            assert_eq!(cube, before, "{:?}", twist);
        }
    }

    proptest! {
        #[test]
        fn twist_then_inverse_is_identity(
            setup in prop::collection::vec(0usize..5, 0..12),
            pick in 0usize..5,
            size in 1usize..5,
        ) {
            let mut cube = marked_cube(size);
            for index in setup {
                cube.twist(twists()[index]);
            }
            let before = cube.clone();
            let twist = twists()[pick];
            cube.twist(twist);
            prop_assert!(cube.role_table_is_bijection());
            cube.twist(twist.inverse());
            prop_assert_eq!(cube, before);
        }
    }
}
