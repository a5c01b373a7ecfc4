/// Component module exports

pub mod choice_list;
pub mod header;
pub mod slider;

pub use choice_list::ChoiceList;
pub use header::StepHeader;
pub use slider::SliderRow;
