mod calculating;
mod flow;
mod landing;
mod quiz;
mod results;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use calculating::{CALCULATING_MESSAGES, CalculatingView};
pub use flow::QuizFlow;
pub use landing::LandingView;
pub use quiz::QuizView;
pub use results::ResultsView;
