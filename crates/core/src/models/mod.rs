pub mod category;
pub mod dashboard;
pub mod emotion;
pub mod goal;
pub mod ledger;
pub mod settings;
pub mod story;
pub mod transaction;
