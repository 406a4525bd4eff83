//! Parking-lot puzzle: drive every car into its own slot.
//!
//! Layouts are text grids:
//!
//! ```text
//! #######
//! #A...0#
//! #.#.#.#
//! #B...1#
//! #######
//! ```
//!
//! - `#` wall, `.` passage
//! - `A`..`J` cars, indexed from `A`
//! - `0`..`9` slots; slot `i` belongs to car `i`
//!
//! Moving car `i` one cell costs `26 - i`. Entering another car's slot adds
//! a penalty of 100.

use std::fmt;
use std::path::Path;

use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::error::read_file;
use crate::core::{Error, Heuristic, Problem, Result};

const MAX_CARS: usize = 10;
const FOREIGN_SLOT_PENALTY: f64 = 100.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub fn step(self, direction: Direction) -> Self {
        let (dx, dy) = direction.offset();
        Self::new(self.x + dx, self.y + dy)
    }

    #[must_use]
    pub fn manhattan(self, other: Point) -> i32 {
        (self.x - other.x).abs() + (self.y - other.y).abs()
    }
}

/// Grid direction. `y` grows downwards.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Right,
    Up,
    Left,
    Down,
}

impl Direction {
    /// Enumeration order of car moves.
    pub const ALL: [Direction; 4] = [Direction::Right, Direction::Up, Direction::Left, Direction::Down];

    #[must_use]
    pub const fn offset(self) -> (i32, i32) {
        match self {
            Direction::Right => (1, 0),
            Direction::Up => (0, -1),
            Direction::Left => (-1, 0),
            Direction::Down => (0, 1),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let arrow = match self {
            Direction::Right => "R",
            Direction::Up => "U",
            Direction::Left => "L",
            Direction::Down => "D",
        };
        f.write_str(arrow)
    }
}

/// Car positions, indexed by car.
pub type ParkingState = SmallVec<[Point; MAX_CARS]>;

/// Move car `car` one cell in `direction`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ParkingAction {
    pub car: usize,
    pub direction: Direction,
}

impl fmt::Display for ParkingAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", car_letter(self.car), self.direction)
    }
}

fn car_letter(car: usize) -> char {
    char::from(b'A' + car as u8)
}

#[derive(Clone, Debug)]
pub struct ParkingProblem {
    passages: FxHashSet<Point>,
    cars: ParkingState,
    /// Slot position -> owning car.
    slots: FxHashMap<Point, usize>,
    width: i32,
    height: i32,
}

impl ParkingProblem {
    /// Parse a layout. Blank lines and surrounding whitespace are ignored.
    pub fn from_text(text: &str) -> Result<Self> {
        let lines: Vec<&str> = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();
        if lines.is_empty() {
            return Err(Error::InvalidLayout("empty layout".into()));
        }

        let mut passages = FxHashSet::default();
        let mut cars: [Option<Point>; MAX_CARS] = [None; MAX_CARS];
        let mut slots = FxHashMap::default();

        for (y, line) in lines.iter().enumerate() {
            for (x, c) in line.chars().enumerate() {
                if c == '#' {
                    continue;
                }
                let point = Point::new(x as i32, y as i32);
                passages.insert(point);
                match c {
                    'A'..='J' => {
                        let car = (c as u8 - b'A') as usize;
                        if cars[car].replace(point).is_some() {
                            return Err(Error::InvalidLayout(format!("car {} appears twice", c)));
                        }
                    }
                    '0'..='9' => {
                        slots.insert(point, (c as u8 - b'0') as usize);
                    }
                    _ => {}
                }
            }
        }

        let count = cars.iter().take_while(|car| car.is_some()).count();
        if count == 0 {
            return Err(Error::InvalidLayout("no cars".into()));
        }
        if let Some(gap) = cars[count..].iter().position(Option::is_some) {
            return Err(Error::InvalidLayout(format!(
                "car {} present but car {} missing",
                car_letter(count + gap),
                car_letter(count)
            )));
        }

        Ok(Self {
            passages,
            cars: cars.iter().flatten().copied().collect(),
            slots,
            width: lines.iter().map(|line| line.chars().count()).max().unwrap_or(0) as i32,
            height: lines.len() as i32,
        })
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        Self::from_text(&read_file(path)?)
    }

    #[must_use]
    pub fn car_count(&self) -> usize {
        self.cars.len()
    }

    /// Slot position owned by `car`, if the layout has one.
    #[must_use]
    pub fn slot_of(&self, car: usize) -> Option<Point> {
        self.slots
            .iter()
            .find(|(_, &owner)| owner == car)
            .map(|(&point, _)| point)
    }

    /// Admissible heuristic: each car's distance to its slot times its
    /// per-move cost.
    #[must_use]
    pub fn distance_heuristic(&self) -> SlotDistance {
        SlotDistance
    }

    /// Render a state back to the text grid.
    #[must_use]
    pub fn render(&self, state: &ParkingState) -> String {
        let mut out = String::with_capacity(((self.width + 1) * self.height) as usize);
        for y in 0..self.height {
            for x in 0..self.width {
                let point = Point::new(x, y);
                let c = if let Some(car) = state.iter().position(|&p| p == point) {
                    car_letter(car)
                } else if let Some(&slot) = self.slots.get(&point) {
                    char::from(b'0' + slot as u8)
                } else if self.passages.contains(&point) {
                    '.'
                } else {
                    '#'
                };
                out.push(c);
            }
            out.push('\n');
        }
        out
    }

    fn move_cost(car: usize) -> f64 {
        (26 - car) as f64
    }
}

impl Problem for ParkingProblem {
    type State = ParkingState;
    type Action = ParkingAction;

    fn initial_state(&self) -> ParkingState {
        self.cars.clone()
    }

    fn is_goal(&self, state: &ParkingState) -> bool {
        state
            .iter()
            .enumerate()
            .all(|(car, point)| self.slots.get(point) == Some(&car))
    }

    fn actions(&self, state: &ParkingState) -> Vec<ParkingAction> {
        let mut actions = Vec::new();
        for (car, &point) in state.iter().enumerate() {
            for direction in Direction::ALL {
                let target = point.step(direction);
                if self.passages.contains(&target) && !state.contains(&target) {
                    actions.push(ParkingAction { car, direction });
                }
            }
        }
        actions
    }

    fn successor(&self, state: &ParkingState, action: &ParkingAction) -> ParkingState {
        let mut next = state.clone();
        next[action.car] = state[action.car].step(action.direction);
        next
    }

    fn cost(&self, state: &ParkingState, action: &ParkingAction) -> f64 {
        let target = state[action.car].step(action.direction);
        let mut cost = Self::move_cost(action.car);
        if matches!(self.slots.get(&target), Some(&owner) if owner != action.car) {
            cost += FOREIGN_SLOT_PENALTY;
        }
        cost
    }
}

/// See [`ParkingProblem::distance_heuristic`].
#[derive(Clone, Copy, Debug, Default)]
pub struct SlotDistance;

impl Heuristic<ParkingProblem> for SlotDistance {
    fn estimate(&self, problem: &ParkingProblem, state: &ParkingState) -> f64 {
        state
            .iter()
            .enumerate()
            .map(|(car, &point)| match problem.slot_of(car) {
                Some(slot) => f64::from(point.manhattan(slot)) * ParkingProblem::move_cost(car),
                None => 0.0,
            })
            .sum()
    }
}
