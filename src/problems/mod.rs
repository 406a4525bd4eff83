//! Reference `Problem` implementations.
//!
//! - `graph`: explicit weighted digraph, built in code or loaded from JSON
//! - `parking`: grid puzzle where every car must reach its own slot

pub mod graph;
pub mod parking;

pub use graph::{EdgeSpec, EstimateTable, GraphBuilder, GraphProblem, GraphSpec, Step};
pub use parking::{Direction, ParkingAction, ParkingProblem, ParkingState, Point, SlotDistance};
