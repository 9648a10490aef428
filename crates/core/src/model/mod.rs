mod answers;
mod ids;
mod question;
mod response;
mod settings;
mod sin;

pub use answers::AnswerSet;
pub use ids::QuestionId;
pub use question::{BankError, Question, QuestionBank};
pub use response::{ResponseError, ResponseValue};
pub use settings::{QuizSettings, QuizSettingsDraft, ResponseWeights, SettingsError};
pub use sin::Sin;
