use serde::{Deserialize, Serialize};

use super::category::Category;
use super::goal::FinancialGoal;
use super::settings::Settings;
use super::story::Story;
use super::transaction::Transaction;

/// The main local data container. Everything in here gets serialized,
/// encrypted, and saved to the portable vault file.
///
/// Mirrors the hosted backend's tables one-to-one, so the same query
/// semantics apply whether rows live here or remotely.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ledger {
    pub transactions: Vec<Transaction>,
    pub categories: Vec<Category>,
    pub goals: Vec<FinancialGoal>,
    pub stories: Vec<Story>,

    /// User settings (display currency, hosted-backend credentials).
    #[serde(default)]
    pub settings: Settings,
}

impl Default for Ledger {
    fn default() -> Self {
        Self {
            transactions: Vec::new(),
            categories: Vec::new(),
            goals: Vec::new(),
            stories: Vec::new(),
            settings: Settings::default(),
        }
    }
}
