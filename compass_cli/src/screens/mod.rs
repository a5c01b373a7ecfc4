/// Screen module exports

pub mod guidance;
pub mod intro;
pub mod psychometric;
pub mod results;
pub mod technical;
pub mod wiscar;

pub use guidance::GuidanceScreen;
pub use intro::IntroScreen;
pub use psychometric::PsychometricScreen;
pub use results::ResultsScreen;
pub use technical::TechnicalScreen;
pub use wiscar::WiscarScreen;
