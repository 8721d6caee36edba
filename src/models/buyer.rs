use crate::models::account::AccountId;

/// A party purchasing from a seller, paying from its own bank account.
#[derive(Debug, Clone)]
pub struct Buyer {
    id: u32,
    name: String,
    account_id: AccountId,
}

impl Buyer {
    pub fn new(id: u32, name: impl Into<String>, account_id: AccountId) -> Self {
        Self {
            id,
            name: name.into(),
            account_id,
        }
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn account_id(&self) -> AccountId {
        self.account_id
    }
}
