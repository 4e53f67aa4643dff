pub mod bindings;
pub mod capabilities;
pub mod counter;
pub mod functions;
pub mod records;

use crate::domain::ports::Demo;

/// Every demonstration, in the order the tour runs them.
pub fn registry() -> Vec<Box<dyn Demo>> {
    vec![
        Box::new(bindings::ImmutableBinding),
        Box::new(bindings::MutableBinding),
        Box::new(bindings::ScopedBlock),
        Box::new(functions::FunctionValues),
        Box::new(functions::CurriedMultiplier),
        Box::new(functions::Greeting),
        Box::new(records::PointEquality),
        Box::new(counter::TicketCounterDemo),
        Box::new(capabilities::Capabilities),
    ]
}
