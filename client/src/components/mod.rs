//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render one simulator surface each and report user actions to
//! their page through callbacks; only `connection_banner` reads context.

pub mod connection_banner;
pub mod file_upload;
pub mod progress_steps;
pub mod response_submission;
pub mod results_dashboard;
pub mod scenario_selector;
