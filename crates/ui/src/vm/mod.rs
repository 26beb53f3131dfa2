mod quiz_vm;

pub use quiz_vm::{
    ActiveVm, AnswerOutcome, COUNT_CHOICES, OptionVm, ResultVm, ReviewMarker, ReviewVm,
    TIMER_LOW_SECS, map_active, map_result, map_review,
};
