// Career Compass core library
// Question bank, scoring, wizard session, and guidance derivations
// shared by the terminal front end.

pub mod guidance;
pub mod question_bank;
pub mod scoring;
pub mod session;
pub mod types;
