mod quiz_vm;
mod sin_vm;

pub use quiz_vm::{
    AnswerOptionVm, LandingVm, QuestionVm, ResultsVm, ScoreRowVm, ScreenVm, count_label,
    map_screen,
};
pub use sin_vm::{EQUANIMITY, SinProfile, sin_profile};
