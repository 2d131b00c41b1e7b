pub mod eligibility;
pub mod mortgage;
