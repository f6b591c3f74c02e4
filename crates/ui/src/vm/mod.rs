mod card_vm;
mod normal_vm;
mod timed_vm;

pub use card_vm::{CardFaceVm, format_tally};
pub use normal_vm::NormalVm;
pub use timed_vm::TimedVm;
